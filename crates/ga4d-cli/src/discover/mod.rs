//! Discovery command: enumerate accounts and properties, resolve a domain
//! for each, categorize, and render the result through the selected sinks.
//!
//! Per-account and per-row failures are logged and skipped rather than
//! propagated so a single bad item does not abort the full run; only the
//! top-level account listing (and missing credentials) are fatal.

mod csv;
mod pipeline;
mod sql;
mod upsert;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};

use ga4d_admin::credentials::{self, ANALYTICS_READONLY_SCOPE};
use ga4d_admin::{AdminClient, CredentialSource};
use ga4d_core::AppConfig;

/// Which artifacts the discover run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Sql,
    Csv,
    Both,
}

/// Arguments for `ga4d-cli discover`.
#[derive(Debug, Args)]
pub struct DiscoverArgs {
    /// Path to the service-account JSON key (overrides GA4_CREDENTIALS_PATH)
    #[arg(long)]
    pub credentials: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "sql")]
    pub output: OutputMode,

    /// Output SQL file path
    #[arg(long, default_value = "discovered-ga4-properties.sql")]
    pub sql_file: PathBuf,

    /// Output CSV file path
    #[arg(long, default_value = "discovered-ga4-properties.csv")]
    pub csv_file: PathBuf,

    /// Write the compact CSV (domain, property ID, name, account) instead of
    /// the full destination-table shape
    #[arg(long)]
    pub csv_compact: bool,

    /// Upsert rows directly into the ga4_properties table (needs DATABASE_URL)
    #[arg(long)]
    pub upsert: bool,
}

/// Runs the full discovery pipeline and writes the requested outputs.
///
/// # Errors
///
/// Returns an error if credentials are missing, the account listing fails,
/// no properties are discovered, an output file cannot be written, or
/// `--upsert` was requested without `DATABASE_URL`.
pub async fn run_discover(config: &AppConfig, args: &DiscoverArgs) -> anyhow::Result<()> {
    let client = build_client(config, args.credentials.as_deref(), ANALYTICS_READONLY_SCOPE)
        .await?;

    println!("Discovering GA4 properties...\n");
    let rows = pipeline::discover_rows(&client).await?;

    if rows.is_empty() {
        anyhow::bail!(
            "no GA4 properties found; check that:\n  \
             1. the service account has Analytics Viewer access\n  \
             2. the service account email is added to GA4 properties\n  \
             3. you're using the correct credentials"
        );
    }

    println!("\nTotal GA4 properties discovered: {}\n", rows.len());

    if matches!(args.output, OutputMode::Sql | OutputMode::Both) {
        let rendered = sql::render_sql(&rows);
        std::fs::write(&args.sql_file, rendered)
            .with_context(|| format!("failed to write {}", args.sql_file.display()))?;
        println!("SQL saved to: {}", args.sql_file.display());
    }

    if matches!(args.output, OutputMode::Csv | OutputMode::Both) {
        let rendered = if args.csv_compact {
            csv::render_csv_compact(&rows)?
        } else {
            csv::render_csv(&rows)?
        };
        std::fs::write(&args.csv_file, rendered)
            .with_context(|| format!("failed to write {}", args.csv_file.display()))?;
        println!("CSV saved to: {}", args.csv_file.display());
    }

    if args.upsert {
        let database_url = config.database_url.as_deref().ok_or_else(|| {
            anyhow::anyhow!("DATABASE_URL is not set; cannot upsert discovered properties")
        })?;
        let pool =
            ga4d_db::connect_pool(database_url, ga4d_db::PoolConfig::from_app_config(config))
                .await
                .context("failed to connect to the destination database")?;
        ga4d_db::run_migrations(&pool).await?;

        let totals = upsert::upsert_rows(&pool, &rows).await;
        println!("\nUpsert complete:");
        println!("  Upserted: {}", totals.upserted);
        println!("  Errors:   {}", totals.errors);

        let stored = ga4d_db::count_ga4_properties(&pool).await?;
        println!("  Total properties in database: {stored}");
    }

    println!("\nDiscovery complete. Next steps:");
    if matches!(args.output, OutputMode::Sql | OutputMode::Both) {
        println!("  1. Review {}", args.sql_file.display());
        println!("  2. Run it in the Supabase SQL editor or via psql");
    }
    if matches!(args.output, OutputMode::Csv | OutputMode::Both) {
        println!("  - Review {} and edit domains/categories if needed", args.csv_file.display());
    }
    if args.upsert {
        println!("  - Verify the rows in the dashboard, then run the first GA4 sync");
    }

    Ok(())
}

/// Resolves the credential source (flag > env path > inline env JSON),
/// exchanges it for a token, and builds the Admin API client.
pub(crate) async fn build_client(
    config: &AppConfig,
    credentials_flag: Option<&std::path::Path>,
    scope: &str,
) -> anyhow::Result<AdminClient> {
    let path = credentials_flag.or(config.ga4_credentials_path.as_deref());
    let source = CredentialSource::from_config(path, config.ga4_credentials_json.as_deref())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no GA4 credentials configured; pass --credentials or set \
                 GA4_CREDENTIALS_PATH / GA4_SERVICE_ACCOUNT_CREDENTIALS"
            )
        })?;

    let auth_header = credentials::fetch_auth_header(source, scope)
        .await
        .context("failed to obtain an access token for the Admin API")?;
    let client = AdminClient::new(&auth_header, config.request_timeout_secs)
        .context("failed to build the Admin API client")?;
    Ok(client)
}
