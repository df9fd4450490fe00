//! Newsdesk HTTP server entry point
//!
//! Starts the search API for the news site.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsdesk::core::config::Config;
use newsdesk::core::services::Services;
use newsdesk::http;

/// Relevance search API for the news site
#[derive(Parser, Debug)]
#[command(name = "newsdesk", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// Base URL of the CMS content API
    #[arg(long)]
    content_api_url: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "NEWSDESK_LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "newsdesk=info,tower_http=debug".into());
    if cli.log_json {
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

    tracing::info!("Starting Newsdesk search service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration, CLI flags win over file and env
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.content_api_url {
        config.content_store.base_url = url;
    }
    config.validate()?;
    config.log_config();

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create shared services
    let services = Arc::new(Services::new(config)?);
    let app = http::router(services);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
