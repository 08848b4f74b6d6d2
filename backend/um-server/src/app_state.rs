use um_config::AuthConfig;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Credential pair accepted by `POST /api/login`
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(auth: AuthConfig) -> Self {
        Self { auth }
    }
}
