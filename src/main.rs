use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use junievest::connector::api::{Container, ContainerConfig, Router};
use junievest::Commands;

#[derive(Parser)]
#[command(name = "junievest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer with canned replies instead of calling the completion API
    #[arg(long, global = true)]
    mock: bool,

    /// OpenRouter API key (overrides OPENROUTER_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Completion API base URL (overrides OPENROUTER_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Origin sent as HTTP-Referer (overrides JUNIEVEST_ORIGIN)
    #[arg(long, global = true)]
    origin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env file: {}", e),
    }

    let container = Container::new(ContainerConfig {
        mock: cli.mock,
        api_key: cli.api_key,
        base_url: cli.base_url,
        origin: cli.origin,
    });

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
