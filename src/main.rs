mod assembler;
mod cli;
mod converter;
mod export;
mod extract;
mod front_matter;
mod locale;
mod manifest;
mod markdown;
mod reader;
mod settings;

use anyhow::Result;
use clap::Parser;
use settings::Settings;
use tracing::info;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = cli::Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply(&mut settings);
    info!(settings = ?settings, "settings loaded");

    converter::run(&settings, &cli.languages)
}
