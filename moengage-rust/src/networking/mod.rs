mod http_types;
mod network_client;
pub mod network_error;

pub use http_types::*;
pub use network_client::*;
pub use network_error::*;
