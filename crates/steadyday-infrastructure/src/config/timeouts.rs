use std::time::Duration;

/// Timeouts for the outbound completion call and the SQLite pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Whole-request timeout for the completion service
    pub http_request: Duration,

    /// Connect timeout for the completion service
    pub http_connect: Duration,

    /// How long to wait for a pooled database connection
    pub db_acquire: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        GLOBAL_TIMEOUT_CONFIG
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the completion request timeout, e.g. from settings.
    pub fn with_http_request_secs(mut self, secs: u64) -> Self {
        self.http_request = Duration::from_secs(secs);
        self
    }

    /// Get the global timeout configuration
    pub fn global() -> &'static Self {
        &GLOBAL_TIMEOUT_CONFIG
    }
}

static GLOBAL_TIMEOUT_CONFIG: TimeoutConfig = TimeoutConfig {
    http_request: Duration::from_secs(30),
    http_connect: Duration::from_secs(10),
    db_acquire: Duration::from_secs(10),
};
