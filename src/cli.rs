use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "hfchat",
    version,
    about = "Terminal chat client for the HuggingFace Inference API"
)]
pub struct Cli {
    /// Path to the configuration file (default: config/client.toml)
    #[arg(long)]
    pub config: Option<String>,
    /// API token; overrides the environment variable
    #[arg(long)]
    pub token: Option<String>,
    /// Model identifier; overrides the configured default
    #[arg(long)]
    pub model: Option<String>,
    /// Base URL of the inference endpoint
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Override max_new_tokens for every turn
    #[arg(long)]
    pub max_new_tokens: Option<u32>,
    /// Override sampling temperature for every turn
    #[arg(long)]
    pub temperature: Option<f32>,
    /// Override nucleus sampling probability for every turn
    #[arg(long)]
    pub top_p: Option<f32>,
    /// Override repetition penalty for every turn
    #[arg(long)]
    pub repetition_penalty: Option<f32>,
    /// One-shot prompt; when given, print the answer and exit instead of
    /// starting the chat interface
    #[arg()]
    pub prompt: Vec<String>,
}

impl Cli {
    /// Collect the parameter flags into overrides for the adapter.
    pub fn overrides(&self) -> crate::inference::ParameterOverrides {
        crate::inference::ParameterOverrides {
            max_new_tokens: self.max_new_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            repetition_penalty: self.repetition_penalty,
            ..Default::default()
        }
    }
}
