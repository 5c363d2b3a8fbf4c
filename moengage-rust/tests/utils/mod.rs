pub mod mock_log_provider;
pub mod mock_moapi;
