pub use api_response::ApiResponse;
pub use customer_payload::CustomerPayload;
pub use event_payload::{EventAction, EventPayload, DEFAULT_USER_TIMEZONE_OFFSET};
pub use moengage::Moengage;
pub use moengage_err::MoengageErr;
pub use moengage_options::{MoengageOptions, MoengageOptionsBuilder};

pub mod networking;
pub mod output_logger;

mod api_response;
mod customer_payload;
mod event_payload;
mod moengage;
mod moengage_err;
mod moengage_options;
