/// Shell configuration loaded from environment variables.
///
/// Defaults suit a backend running locally; override via environment
/// variables (a `.env` file is honoured).
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Base URL of the story API.
    pub api_url: String,
}

/// Default backend location when `FABULA_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

impl ShellConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                 |
    /// |------------------|-------------------------|
    /// | `FABULA_API_URL` | `http://127.0.0.1:8000` |
    pub fn from_env() -> Self {
        let api_url = std::env::var("FABULA_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        Self { api_url }
    }
}
