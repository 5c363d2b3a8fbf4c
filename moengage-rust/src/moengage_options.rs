use std::sync::Arc;

use crate::output_logger::{LogLevel, OutputLogProvider};

#[derive(Clone, Default)]
pub struct MoengageOptions {
    pub network_timeout_ms: Option<u64>,
    pub output_log_level: Option<LogLevel>,
    pub output_logger_provider: Option<Arc<dyn OutputLogProvider>>,
    pub user_timezone_offset: Option<i64>,
}

impl MoengageOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // The builder method for more complex initialization
    #[must_use]
    pub fn builder() -> MoengageOptionsBuilder {
        MoengageOptionsBuilder::default()
    }
}

#[derive(Default)]
pub struct MoengageOptionsBuilder {
    inner: MoengageOptions,
}

impl MoengageOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn network_timeout_ms(mut self, network_timeout_ms: Option<u64>) -> Self {
        self.inner.network_timeout_ms = network_timeout_ms;
        self
    }

    #[must_use]
    pub fn output_log_level(mut self, output_log_level: Option<LogLevel>) -> Self {
        self.inner.output_log_level = output_log_level;
        self
    }

    #[must_use]
    pub fn output_logger_provider(
        mut self,
        output_logger_provider: Option<Arc<dyn OutputLogProvider>>,
    ) -> Self {
        self.inner.output_logger_provider = output_logger_provider;
        self
    }

    #[must_use]
    pub fn user_timezone_offset(mut self, user_timezone_offset: Option<i64>) -> Self {
        self.inner.user_timezone_offset = user_timezone_offset;
        self
    }

    #[must_use]
    pub fn build(self) -> MoengageOptions {
        self.inner
    }
}
