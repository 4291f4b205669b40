use anyhow::{Context, Result};
use clap::Parser;
use mobile_lookup_server::{
    adapters::outbound::provider::http_provider::{DEFAULT_ACCESS_KEY, DEFAULT_ENDPOINT},
    app::{AppBuilder, AppConfig},
    ProviderConfig,
};
use std::{net::SocketAddr, time::Duration};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "mobile-lookup-server")]
#[command(about = "Web front end for a third-party mobile number lookup API", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "5000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Upstream lookup endpoint URL
    #[arg(long, env = "LOOKUP_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    lookup_endpoint: String,

    /// Access key sent to the upstream provider
    #[arg(long, env = "LOOKUP_ACCESS_KEY", default_value = DEFAULT_ACCESS_KEY)]
    lookup_key: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "LOOKUP_TIMEOUT_SECS", default_value = "20")]
    lookup_timeout_secs: u64,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> AppConfig {
        AppConfig {
            provider: ProviderConfig {
                endpoint: self.lookup_endpoint.clone(),
                access_key: self.lookup_key.clone(),
                timeout: Duration::from_secs(self.lookup_timeout_secs),
            },
        }
    }

    fn env_filter(&self) -> EnvFilter {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => "info",
        };

        // RUST_LOG wins when set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }

    fn init_logging(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging()?;

    info!("Starting Mobile Lookup Server");
    info!("Lookup endpoint: {}", cli.lookup_endpoint);
    info!("Lookup timeout: {}s", cli.lookup_timeout_secs);

    // Build the application
    let app_services = AppBuilder::new()
        .with_config(cli.to_app_config())
        .build()
        .context("Failed to build application")?;

    // Create the router
    let router = app_services.into_router();

    // Bind to address
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", cli.host, cli.port))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);

    // Start the server
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to start server")?;

    info!("Server stopped");

    Ok(())
}
