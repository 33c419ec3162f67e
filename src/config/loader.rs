use super::catalog::{ModelCatalog, ModelCategory};
use super::error::ConfigError;
use dotenvy::from_filename;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub token_env: Option<String>,
    #[serde(default)]
    pub catalog: Vec<ModelCategory>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename("config/.env");
    });
}

/// Load configuration from a file path.
///
/// An explicitly given path must exist; when no path is given and nothing
/// sits at the default location, the built-in defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => {
            let default_path = Path::new(super::CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)
            } else {
                debug!("No configuration file found, using built-in defaults");
                validate_and_build(RawConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<super::AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<super::AppConfig, ConfigError> {
    let mut catalog = if parsed.catalog.is_empty() {
        ModelCatalog::builtin()
    } else {
        ModelCatalog {
            categories: parsed.catalog,
        }
    };

    let model = match parsed.model {
        Some(model) => {
            catalog.ensure_model(&model);
            model
        }
        None => catalog
            .first_model()
            .ok_or(ConfigError::EmptyCatalog)?
            .to_string(),
    };

    Ok(super::AppConfig {
        model,
        endpoint: parsed
            .endpoint
            .unwrap_or_else(|| crate::inference::DEFAULT_BASE_URL.to_string()),
        token_env: parsed
            .token_env
            .unwrap_or_else(|| super::TOKEN_ENV_VAR.to_string()),
        catalog,
    })
}

/// Resolve the bearer token: an explicit flag wins, otherwise the
/// configured environment variable (populated from config/.env or the
/// process environment).
pub fn resolve_token(flag: Option<&str>, env_var: &str) -> Result<String, ConfigError> {
    ensure_env_loaded();

    if let Some(token) = flag.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }

    env::var(env_var)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ConfigError::MissingToken {
            env_var: env_var.to_string(),
        })
}
