pub mod cli;
pub mod config;
pub mod inference;
pub mod tui;

pub use cli::Cli;
pub use config::{AppConfig, ConfigError, ModelCatalog};
pub use inference::{InferenceClient, InferenceError, TextGenerator};

use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use tui::screens::chat;

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let one_shot = !cli.prompt.is_empty();
    // The TUI owns the terminal; logs would tear the alternate screen.
    init_tracing(!one_shot);
    debug!(config = ?cli.config, model = ?cli.model, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let mut file_config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path or defaults");
    }

    if let Some(endpoint) = cli.endpoint.clone() {
        file_config.endpoint = endpoint;
    }
    if let Some(model) = cli.model.clone() {
        file_config.catalog.ensure_model(&model);
        file_config.model = model;
    }

    // The adapter is never invoked without a token; refuse to start instead.
    let token = config::resolve_token(cli.token.as_deref(), &file_config.token_env)?;
    let client = Arc::new(InferenceClient::new(token, file_config.endpoint.clone()));

    if one_shot {
        let prompt = cli.prompt.join(" ");
        info!(model = %file_config.model, "Dispatching one-shot prompt");
        match client
            .generate(&file_config.model, &prompt, &cli.overrides())
            .await
        {
            Ok(text) => println!("{text}"),
            Err(err) => println!("{}", err.user_message()),
        }
        return Ok(());
    }

    info!(model = %file_config.model, "Starting chat interface");
    let model = file_config.model.clone();
    chat::run_chat(client, file_config.catalog, model, cli.overrides()).await?;
    Ok(())
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
