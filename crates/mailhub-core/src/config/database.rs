//! Mail store database configuration.

use serde::{Deserialize, Serialize};

/// Connection pool settings for the PostgreSQL mail store.
///
/// The pool is shared by every IMAP session, so `max_connections` caps how
/// much store work runs concurrently across the whole server, not per
/// session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL of the mail store.
    pub url: String,
    /// Upper bound on pooled connections across all sessions.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connections kept warm so a burst of logins does not pay the
    /// connect cost.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// How long a session waits for a free connection before its store
    /// operation fails, in seconds.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
    /// How long an unused connection stays open, in seconds. Mailbox
    /// traffic is bursty, so idle connections are kept around for a while.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

fn default_max_connections() -> u32 {
    50
}

fn default_min_connections() -> u32 {
    2
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_defaults() {
        let config: DatabaseConfig =
            serde_json::from_str(r#"{"url": "postgres://localhost/mailhub"}"#).unwrap();

        assert_eq!(config.max_connections, 50);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.acquire_timeout_seconds, 5);
        assert_eq!(config.idle_timeout_seconds, 600);
    }
}
