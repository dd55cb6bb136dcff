//! Standalone decision server.
//!
//! Usage: cargo run -p botnaught_web --bin botnaught-server -- --port 9501

use botnaught_ai::config;
use botnaught_web::{LogFormat, WebServer};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "botnaught-server", about = "Poker betting decision server")]
struct Args {
    /// Host to bind to (overrides BOTNAUGHT_HOST and the config file)
    #[arg(long)]
    host: Option<String>,
    /// Port to bind to (overrides BOTNAUGHT_PORT and the config file)
    #[arg(long, short)]
    port: Option<u16>,
    /// Strategy name (overrides BOTNAUGHT_STRATEGY and the config file)
    #[arg(long)]
    strategy: Option<String>,
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormatArg,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    botnaught_web::init_logging(match args.log_format {
        LogFormatArg::Text => LogFormat::Text,
        LogFormatArg::Json => LogFormat::Json,
    })?;

    let resolved = config::load_with_sources()?;
    let mut settings = resolved.config;
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(strategy) = args.strategy {
        settings.strategy = strategy;
    }

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        strategy = %settings.strategy,
        thresholds = ?resolved.sources.thresholds,
        "starting botnaught"
    );

    let handle = WebServer::new(&settings)?.start().await?;
    tracing::info!("serving on http://{}, press Ctrl+C to stop", handle.address());

    tokio::signal::ctrl_c().await?;

    tracing::info!("shutting down");
    handle.shutdown().await?;
    Ok(())
}
