use clap::{Parser, Subcommand};

mod discover;
mod grant;

#[derive(Debug, Parser)]
#[command(name = "ga4d-cli")]
#[command(about = "GA4 property discovery and access tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Discover GA4 properties and emit SQL, CSV, or direct upserts
    Discover(discover::DiscoverArgs),
    /// Grant the sync service account Viewer access to every property
    GrantAccess(grant::GrantArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    // dotenv is already loaded above; read straight from the process env.
    let config = ga4d_core::load_app_config_from_env()?;

    match cli.command {
        Commands::Discover(args) => discover::run_discover(&config, &args).await,
        Commands::GrantAccess(args) => grant::run_grant_access(&config, &args).await,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
