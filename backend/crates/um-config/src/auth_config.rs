use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_PASSWORD, DEFAULT_AUTH_USERNAME};

use serde::Deserialize;

/// The single credential pair accepted by the login endpoint.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: String::from(DEFAULT_AUTH_USERNAME),
            password: String::from(DEFAULT_AUTH_PASSWORD),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.username.is_empty() {
            return Err(ConfigError::auth("auth.username must not be empty"));
        }

        if self.password.is_empty() {
            return Err(ConfigError::auth("auth.password must not be empty"));
        }

        Ok(())
    }

    /// Exact match against the configured pair.
    pub fn accepts(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
