use std::time::Duration;

pub const DEFAULT_POOL_SIZE: usize = 8;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_READINESS_TTL: Duration = Duration::from_secs(30);
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Sizing and wait bounds for the connection pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Number of connections opened up front. Must be at least 1.
    pub size: usize,
    /// How long an acquisition may wait in the queue before giving up.
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_POOL_SIZE,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Upper bound on a single report query, measured after acquisition.
    pub query_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// How long a readiness probe result is trusted.
    pub readiness_ttl: Duration,
    /// Reported on 503 responses so clients can switch to offline values.
    pub fallback_mode: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            readiness_ttl: DEFAULT_READINESS_TTL,
            fallback_mode: false,
        }
    }
}
