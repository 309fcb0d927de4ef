use clap::Parser;
use tracing_subscriber::EnvFilter;

mod summary;

#[derive(Debug, Parser)]
#[command(name = "clanrank")]
#[command(about = "Clan rank summary for an OSRS player")]
struct Cli {
    /// OSRS display name to evaluate
    username: String,

    /// Ignore cached payloads and refetch from the live APIs
    #[arg(long)]
    refresh: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = clanrank_core::load_config()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    summary::run(&config, &cli.username, cli.refresh).await
}
