//! Server configuration

use std::env;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to, `host:port`.
    pub addr: String,
}

impl ServerConfig {
    pub const DEFAULT_ADDR: &'static str = "127.0.0.1:3000";

    /// Read configuration from the environment, falling back to defaults.
    ///
    /// `PLATTER_ADDR` overrides the bind address.
    pub fn from_env() -> Self {
        let addr = env::var("PLATTER_ADDR").unwrap_or_else(|_| Self::DEFAULT_ADDR.to_string());
        Self { addr }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: Self::DEFAULT_ADDR.to_string(),
        }
    }
}
