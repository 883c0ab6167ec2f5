mod collect;
mod output;

use std::env::VarError;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use storesearch_core::{build_app_config, AppConfig};
use storesearch_places::PlacesClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storesearch")]
#[command(about = "Export Google Places results for a store name in a city to JSON")]
struct Cli {
    /// Store or brand name to search for
    store_name: String,

    /// City to search in
    city_name: String,

    /// Language for returned names and addresses (e.g. en, ja, zh-TW)
    language: String,

    /// Directory the `<store_name>_in_<city>.json` export is written to
    #[arg(long, env = "STORESEARCH_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Anything after the language is accepted and ignored.
    #[arg(hide = true)]
    _extra: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    execute(&cli, |key| std::env::var(key)).await?;

    Ok(())
}

/// Loads configuration through `lookup`, sets up logging, then runs the
/// export. Configuration is validated before any request is made, so a
/// missing credential never leaves an output file behind.
async fn execute<F>(cli: &Cli, lookup: F) -> anyhow::Result<PathBuf>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let config = build_app_config(lookup).context("failed to load configuration")?;
    init_tracing(&config.log_level)?;
    tracing::debug!(?config, "configuration loaded");

    run(cli, &config).await
}

/// Installs the global `fmt` subscriber. `RUST_LOG` wins over the configured
/// level, but the configured level must parse either way. Repeated calls are
/// no-ops.
fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let default_filter = EnvFilter::try_new(default_level)
        .with_context(|| format!("invalid STORESEARCH_LOG_LEVEL {default_level:?}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or(default_filter);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

async fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<PathBuf> {
    let client = PlacesClient::with_base_url(
        &config.google_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.places_base_url,
    )
    .context("failed to build Places client")?;

    let query = collect::search_query(&cli.store_name, &cli.city_name);
    tracing::info!(%query, language = %cli.language, "searching places");

    let stores =
        collect::collect_stores(&client, &query, &cli.language, config.page_token_delay_ms)
            .await?;

    let file_name = output::output_file_name(&cli.store_name, &cli.city_name);
    let path = output::write_output(&cli.output_dir, &file_name, &stores)?;

    tracing::info!(path = %path.display(), stores = stores.len(), "export written");
    Ok(path)
}

#[cfg(test)]
mod tests;
