// Sparkup - brand generator wizard and summary service
// Main entry point

use anyhow::Result;
use clap::Parser;

use sparkup::cli::{apply_overrides, run_generate, run_wizard, Cli, Commands};
use sparkup::client::HttpSummaryClient;
use sparkup::config::load_config;
use sparkup::logging::{init_logging, LogTarget};
use sparkup::server::BrandServer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Wizard { server_url: None });

    // Load configuration
    let mut config = load_config()?;
    apply_overrides(&mut config, &command)?;

    match command {
        Commands::Serve { .. } => {
            init_logging(&LogTarget::Stderr)?;
            BrandServer::new(config.server).serve().await?;
        }
        Commands::Wizard { .. } => {
            init_logging(&LogTarget::wizard_log(&config.log_dir))?;
            if let Some(summary) = run_wizard(&config).await? {
                println!("{summary}");
            }
        }
        Commands::Generate(args) => {
            init_logging(&LogTarget::Stderr)?;
            let client = HttpSummaryClient::from_config(&config.client)?;
            let summary = run_generate(&args, &client).await?;
            println!("{summary}");
        }
    }

    Ok(())
}
