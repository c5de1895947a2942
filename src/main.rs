use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commissioner::api::state::{ApiSettings, AppState};
use commissioner::cache::DashboardCache;
use commissioner::config::AppConfig;
use commissioner::provider::{DashboardProvider, SleeperClient};

#[derive(Parser)]
#[command(name = "commissioner")]
#[command(about = "Fantasy league dashboard aggregator with caching and graceful fallback")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides config
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Fetch one league dashboard and print it as JSON
    Fetch {
        /// League ID to fetch
        league_id: String,

        /// Week number
        #[arg(long, default_value = "1")]
        week: u16,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = PathBuf::from(&cli.config);
    let (config, config_loaded) = if config_path.exists() {
        (AppConfig::from_file(&config_path)?, true)
    } else {
        (AppConfig::default(), false)
    };

    // Initialize tracing; RUST_LOG wins over --log-level, which wins over the config file
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting commissioner v{}", env!("CARGO_PKG_VERSION"));
    if config_loaded {
        tracing::info!("Loaded config from {:?}", config_path);
    } else {
        tracing::info!("No config file at {:?}, using defaults", config_path);
    }

    match cli.command {
        Commands::Serve { host, port } => {
            let provider: Arc<dyn DashboardProvider> = Arc::new(
                SleeperClient::new(&config.provider)
                    .context("Failed to create provider client")?,
            );
            let cache = Arc::new(DashboardCache::with_system_clock(Duration::from_secs(
                config.cache.ttl_seconds,
            )));
            let state = AppState {
                provider,
                cache,
                settings: Arc::new(ApiSettings::from_config(&config)),
            };

            let app = commissioner::api::build_router(state);
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("Dashboard API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Fetch {
            league_id,
            week,
            pretty,
        } => {
            let client = SleeperClient::new(&config.provider)
                .context("Failed to create provider client")?;
            let week = week.max(1);
            let dashboard = client
                .fetch_dashboard(&league_id, week)
                .await
                .with_context(|| format!("Failed to fetch dashboard for league {}", league_id))?;

            let json = if pretty {
                serde_json::to_string_pretty(&dashboard)?
            } else {
                serde_json::to_string(&dashboard)?
            };
            println!("{}", json);
        }
    }

    Ok(())
}
