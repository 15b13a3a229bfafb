use anyhow::Result;
use clap::{Parser, Subcommand};
use duet_core::config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "duet")]
#[command(about = "Duet - voice commerce assistant and improv show host agents", long_about = None)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "duet.toml")]
    config: PathBuf,

    /// Override the data directory from the config
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the shopping flow: browse, order, amend the order
    ShopDemo,
    /// Run a scripted improv show end to end
    ImprovDemo {
        /// Player name announced to the host
        #[arg(long, default_value = "Maya")]
        player: String,
    },
    /// Print the tool declarations for both agents as JSON
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    match cli.command {
        Commands::ShopDemo => commands::shop_demo::run(&config).await?,
        Commands::ImprovDemo { player } => commands::improv_demo::run(&config, &player).await?,
        Commands::Tools => commands::tools::run(&config)?,
    }

    Ok(())
}
