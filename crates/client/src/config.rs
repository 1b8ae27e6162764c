/// Default backend location for local development.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Gateway configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the fleet backend, without a trailing slash.
    pub backend_url: String,
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url: String = backend_url.into();
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var       | Default                 |
    /// |---------------|-------------------------|
    /// | `BACKEND_URL` | `http://localhost:8080` |
    pub fn from_env() -> Self {
        let backend_url = std::env::var("BACKEND_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.into());
        Self::new(backend_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
