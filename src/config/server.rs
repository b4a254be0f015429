use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to bind the listener to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,

    /// Origins allowed for CORS. Empty disables the CORS layer.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".into()));
        }
        if self.body_limit_bytes == 0 {
            return Err(ConfigError::Validation(
                "server.body_limit_bytes cannot be 0".into(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> (IpAddr, u16) {
        (self.host, self.port)
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit() -> usize {
    1024 * 1024 // 1 MiB; document payloads carry URLs, not file contents
}
