use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather::location::clamp_limit;
use cityweather::server::{self, AppState};
use cityweather::{weather_for, CityResolver, ForecastGateway, ReferenceTables, Settings};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// cityweather — city name to forecast, Latin or Cyrillic.
///
/// Cities are resolved from two local CSV datasets (global and Russian);
/// forecasts come from Open-Meteo.
///
/// Examples:
///   cityweather serve --port 8000
///   cityweather lookup London
///   cityweather lookup Москва --offline
///   cityweather suggest Lon
#[derive(Parser)]
#[command(name = "cityweather", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve {
        #[arg(long, env = "CITYWEATHER_HOST", default_value = "0.0.0.0")]
        host: String,

        #[arg(long, env = "CITYWEATHER_PORT", default_value_t = 8000)]
        port: u16,
    },
    /// Resolve a city and print its forecast as JSON.
    Lookup {
        city: String,

        /// Only resolve the city; do not contact the weather provider.
        #[arg(long)]
        offline: bool,
    },
    /// Print autocomplete suggestions as JSON.
    Suggest {
        query: String,

        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.settings.validate()?;

    // ── Load reference tables (fatal on failure) ────────────────

    let tables = ReferenceTables::load(&cli.settings.world_csv, &cli.settings.regional_csv)
        .context("Failed to load reference datasets")?;

    let resolver = CityResolver::new(Arc::new(tables));
    let gateway = ForecastGateway::new(cli.settings.weather_url.clone(), cli.settings.timeout());

    // ── Dispatch ────────────────────────────────────────────────

    match cli.command {
        Command::Serve { host, port } => {
            server::start(AppState { resolver, gateway }, &host, port)
                .await
                .with_context(|| format!("Server error on {}:{}", host, port))?;
        }
        Command::Lookup { city, offline } => {
            if offline {
                let location = resolver.resolve(&city)?;
                println!("{}", serde_json::to_string_pretty(&location)?);
            } else {
                let result = weather_for(&resolver, &gateway, &city).await?;
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Command::Suggest { query, limit } => {
            let names = resolver.suggest(&query, clamp_limit(limit));
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
    }

    Ok(())
}
