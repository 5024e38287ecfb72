// Command-line interface definition and the non-interactive generate command

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::brand::{FormField, FormPatch, SummaryText};
use crate::client::SummaryService;
use crate::config::Config;
use crate::wizard::WizardController;

/// Sparkup - brand generator wizard and summary service
#[derive(Parser, Debug)]
#[command(name = "sparkup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the summary service HTTP endpoint
    Serve {
        /// Bind address (default: 127.0.0.1:4000)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Run the interactive brand wizard (default)
    Wizard {
        /// Base URL of the summary service
        #[arg(short, long)]
        server_url: Option<String>,
    },

    /// Generate a brand summary without the interactive wizard
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Name of the business
    #[arg(long)]
    pub business_name: Option<String>,

    /// Target audience
    #[arg(long, alias = "target")]
    pub audience: Option<String>,

    /// Primary brand color
    #[arg(long, alias = "palette")]
    pub color: Option<String>,

    /// Communication tone (e.g. playful, formal)
    #[arg(long)]
    pub tone: Option<String>,

    /// Base URL of the summary service
    #[arg(short, long)]
    pub server_url: Option<String>,
}

impl GenerateArgs {
    fn value(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::BusinessName => self.business_name.as_deref(),
            FormField::Audience => self.audience.as_deref(),
            FormField::Color => self.color.as_deref(),
            FormField::Tone => self.tone.as_deref(),
        }
    }
}

/// Apply CLI overrides on top of the loaded configuration
pub fn apply_overrides(config: &mut Config, command: &Commands) -> Result<()> {
    match command {
        Commands::Serve { bind: Some(bind) } => config.server.bind_address = bind.clone(),
        Commands::Wizard {
            server_url: Some(url),
        } => config.client.server_url = url.clone(),
        Commands::Generate(GenerateArgs {
            server_url: Some(url),
            ..
        }) => config.client.server_url = url.clone(),
        _ => return Ok(()),
    }
    config.validate().context("Invalid command-line option")
}

/// Walk the wizard step by step with the values from `args`, then generate.
pub async fn run_generate(
    args: &GenerateArgs,
    service: &dyn SummaryService,
) -> Result<SummaryText> {
    let mut wizard = WizardController::new();

    loop {
        if let Some(field) = wizard.step().field() {
            if let Some(value) = args.value(field) {
                wizard
                    .update_field(FormPatch::single(field, value))
                    .with_context(|| format!("Invalid value for --{}", flag_name(field)))?;
            }
        }
        if !wizard.advance() {
            break;
        }
    }

    let summary = wizard
        .generate(service)
        .await
        .context("Failed to generate brand summary")?;
    Ok(summary)
}

fn flag_name(field: FormField) -> &'static str {
    match field {
        FormField::BusinessName => "business-name",
        FormField::Audience => "audience",
        FormField::Color => "color",
        FormField::Tone => "tone",
    }
}
