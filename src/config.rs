//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// Database holding the employee collection
    pub database_name: String,
    /// Name of the employee collection
    pub collection_name: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 12345)
    /// - `MONGODB_URI` - MongoDB connection string (default: mongodb://localhost:27017)
    /// - `DATABASE_NAME` - Database name (default: muxgocrud)
    /// - `COLLECTION_NAME` - Collection name (default: employee)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            mongodb_uri: env::var("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database_name: env::var("DATABASE_NAME").unwrap_or(defaults.database_name),
            collection_name: env::var("COLLECTION_NAME").unwrap_or(defaults.collection_name),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 12345,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "muxgocrud".to_string(),
            collection_name: "employee".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 12345);
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "muxgocrud");
        assert_eq!(config.collection_name, "employee");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("MONGODB_URI");
        env::remove_var("DATABASE_NAME");
        env::remove_var("COLLECTION_NAME");

        let config = Config::from_env();
        assert_eq!(config.server_port, 12345);
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "muxgocrud");
        assert_eq!(config.collection_name, "employee");
    }
}
