//! Central module for application-wide configuration settings.
//!
//! This module handles loading configuration parameters such as the server
//! bind address. Everything comes from environment variables so deployments
//! can adjust the server without a rebuild.

/// Environment variable naming the socket address the server listens on.
pub const BIND_ENV: &str = "HEALTHTRACK_BIND";

const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults
    /// for anything unset or blank.
    pub fn from_env() -> Self {
        let bind_addr = std::env::var(BIND_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        Self { bind_addr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_falls_back_to_default() {
        // Single test owns the variable to avoid cross-test races.
        std::env::remove_var(BIND_ENV);
        assert_eq!(Config::from_env().bind_addr, DEFAULT_BIND);

        std::env::set_var(BIND_ENV, "0.0.0.0:8080");
        assert_eq!(Config::from_env().bind_addr, "0.0.0.0:8080");
        std::env::remove_var(BIND_ENV);
    }
}
