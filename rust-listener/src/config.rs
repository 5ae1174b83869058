//! Configuration module for environment variable parsing.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the listener to bind on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_parsing() {
        env::remove_var("PORT");
        assert_eq!(Config::from_env().port, 5000);

        env::set_var("PORT", "8081");
        assert_eq!(Config::from_env().port, 8081);

        env::set_var("PORT", "not-a-port");
        assert_eq!(Config::from_env().port, 5000);

        env::remove_var("PORT");
    }
}
