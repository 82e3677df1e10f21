//! Connection pool configuration.
//!
//! The serializer never opens connections. This is the value an
//! application hands to whatever pool executes the rendered SQL, kept here
//! so every dialect crate agrees on its shape and defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 2;

/// Connection pool settings.
///
/// Applications usually run one pool per worker, so the database must
/// accept `max_connections` times the number of workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of connections per pool. At least 1.
    pub max_connections: u32,
}

impl PoolConfig {
    /// Creates a configuration, rejecting a zero connection limit.
    pub const fn new(max_connections: u32) -> Result<Self, ConfigError> {
        Self { max_connections }.validate()
    }

    /// Checks the configuration, typically after deserializing it.
    pub const fn validate(self) -> Result<Self, ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(self.max_connections));
        }
        Ok(self)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_config() {
        assert_eq!(PoolConfig::default().max_connections, 2);
    }

    #[test]
    fn test_zero_connections_rejected() {
        assert_eq!(
            PoolConfig::new(0),
            Err(ConfigError::InvalidMaxConnections(0))
        );
        assert_eq!(PoolConfig::new(8).map(|c| c.max_connections), Ok(8));
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: PoolConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PoolConfig::default());

        let config: PoolConfig = serde_json::from_str(r#"{"max_connections": 0}"#).unwrap();
        assert!(config.validate().is_err());
    }
}
