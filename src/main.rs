use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use codereview::{Commands, Container, ContainerConfig, Presenter, Router};

#[derive(Parser)]
#[command(name = "codereview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer locally without calling the completion endpoint
    #[arg(long, global = true)]
    mock: bool,

    /// Model identifier sent with every request
    #[arg(long, global = true)]
    model: Option<String>,

    /// Chat-completions URL
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Before the filter is built, so RUST_LOG from .env applies.
    let dotenv = dotenvy::dotenv();

    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let container = Container::new(ContainerConfig {
        mock: cli.mock,
        model: cli.model,
        endpoint: cli.endpoint,
    })?;
    let presenter = Presenter::new();

    Router::new(&container, &presenter).route(cli.command).await
}
