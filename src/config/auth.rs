use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Placeholder secret shipped in generated config files. Using it in a real
/// deployment is reported at startup.
pub const DEFAULT_TOKEN_SECRET: &str = "change-me-before-deploying";

/// Authentication configuration.
///
/// The signing secret is injected here rather than read from a module-level
/// singleton so tests can construct token services with throwaway keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify session tokens.
    #[serde(default = "default_token_secret")]
    pub token_secret: String,

    /// Token lifetime in days. Tokens cannot be revoked before expiry,
    /// so this is the only ceiling on a compromised credential.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            token_ttl_days: default_token_ttl_days(),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_secret.is_empty() {
            return Err(ConfigError::Validation(
                "auth.token_secret cannot be empty".into(),
            ));
        }
        if self.token_ttl_days <= 0 {
            return Err(ConfigError::Validation(
                "auth.token_ttl_days must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn uses_default_secret(&self) -> bool {
        self.token_secret == DEFAULT_TOKEN_SECRET
    }
}

fn default_token_secret() -> String {
    DEFAULT_TOKEN_SECRET.to_string()
}

fn default_token_ttl_days() -> i64 {
    7
}
