//! Application configuration
//!
//! Settings come from `config/client.toml` (all fields optional), the
//! `config/.env` file, and CLI flags; flags win over file values. The
//! bearer token is never stored in the TOML file, only the name of the
//! environment variable that carries it.

mod catalog;
mod error;
mod loader;

pub use catalog::{ModelCatalog, ModelCategory};
pub use error::ConfigError;
pub use loader::{ensure_env_loaded, resolve_token};

use std::path::Path;

/// Default configuration file location.
pub const CONFIG_PATH: &str = "config/client.toml";

/// Default environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "HF_API_TOKEN";

/// Validated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Initially selected model identifier.
    pub model: String,
    /// Base URL of the inference endpoint.
    pub endpoint: String,
    /// Name of the environment variable holding the API token.
    pub token_env: String,
    /// Categorized model catalog offered by the picker.
    pub catalog: ModelCatalog,
}

impl AppConfig {
    /// Load and validate configuration from a file path
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        loader::load_config(path)
    }
}
