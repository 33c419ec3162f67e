use clap::Parser;
use hfchat::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    hfchat::run(cli).await
}
