//! rolls: entry point.
//!
//! Parses the command line, initializes tracing, loads optional configuration,
//! builds the router and serves it until SIGINT or SIGTERM.

use clap::Parser;
use const_format::formatcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use rolls::config::{AppConfig, LogFormat, DEFAULT_HTTP_ADDR, DEFAULT_LOG_FILTER};
use rolls::http::{setup_shutdown_handler, start_server, Handle};
use rolls::{create_router, AppState};

/// rolls: A greeting and health-check HTTP service
#[derive(Parser, Debug)]
#[command(name = "rolls", version, about, after_help = AFTER_HELP)]
struct Args {
    /// Path to a TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "rolls=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Port to listen on, overriding http.port
    #[arg(short, long)]
    port: Option<u16>,
}

const AFTER_HELP: &str = formatcp!("Listens on {} unless configured otherwise.", DEFAULT_HTTP_ADDR);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration comes first so the log format is known
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let fmt_layer = match config.logging.format {
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(fmt_layer)
        .init();

    match &args.config {
        Some(path) => tracing::info!(path = %path, "Loaded configuration"),
        None => tracing::info!("No configuration file given, using defaults"),
    }

    let addr = config.http.socket_addr()?;
    let app = create_router(AppState::new());

    let handle = Handle::new();
    setup_shutdown_handler(handle.clone());

    start_server(app, addr, handle).await?;

    Ok(())
}
