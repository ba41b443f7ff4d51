//! Command-line driver for the tuneswap exchange.

mod demo;
mod dto;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tuneswap_core::{ExchangeConfig, PopularityCount};

#[derive(Parser)]
#[command(name = "tuneswap")]
#[command(about = "In-memory music exchange: users, downloads and royalties")]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run a sample exchange session with the built-in users
  Demo {
    /// Print the popularity chart as JSON
    #[arg(long)]
    json: bool,

    /// Popularity count mode (per-song, per-title); overrides the config file
    #[arg(long)]
    count: Option<PopularityCount>,
  },
  /// Show the config file location and the effective [exchange] section
  Config,
}

fn main() -> Result<()> {
  // Logs a stderr; stdout queda para listados e informes.
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let Cli { command } = Cli::parse();
  let config = ExchangeConfig::load().context("failed to load [exchange] config")?;
  tracing::debug!(?config, "config loaded");

  match command {
    Commands::Demo { json, count } => {
      let mode = count.unwrap_or(config.popularity_count);
      demo::run(config, mode, json)
    }
    Commands::Config => {
      let backend = tuneswap_config::config_backend().context("failed to resolve config paths")?;
      println!("# {}", backend.config_file().display());
      println!("[exchange]");
      print!("{}", toml::to_string(&config).context("failed to encode config")?);
      Ok(())
    }
  }
}
