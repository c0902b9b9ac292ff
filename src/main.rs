//! service-2
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                  SERVICE-2                    │
//!     Client Request   │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!     ─────────────────┼─▶│request id│──▶│  router  │──▶│ handlers │  │
//!                      │  │ + trace  │   │          │   │          │  │
//!                      │  └──────────┘   └──────────┘   └────┬─────┘  │
//!                      │                                     │        │
//!                      │                                     ▼        │
//!                      │                              ┌────────────┐  │     ┌───────────┐
//!                      │                              │orchestrator│──┼────▶│ service-1 │
//!                      │                              │ (fan-out)  │◀─┼─────│ /, /health│
//!                      │                              └────────────┘  │     └───────────┘
//!     Client Response  │  ┌──────────┐                       │        │
//!     ◀────────────────┼──│ JSON body│◀──────────────────────┘        │
//!                      │  └──────────┘                                │
//!                      └──────────────────────────────────────────────┘
//! ```

use clap::Parser;

use service_two::config::{self, LogFormat};
use service_two::lifecycle::startup;
use service_two::observability;

#[derive(Parser)]
#[command(name = "service-two")]
#[command(about = "Demo microservice that calls an upstream service", long_about = None)]
struct Cli {
    /// Bind address, overrides PORT
    #[arg(short, long)]
    bind: Option<String>,

    /// Upstream base URL, overrides SERVICE1_URL
    #[arg(short, long)]
    upstream_url: Option<String>,

    /// Log format (pretty or json), overrides LOG_FORMAT
    #[arg(long)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(url) = cli.upstream_url {
        config.upstream.base_url = url;
    }
    if let Some(format) = cli.log_format {
        config.observability.log_format = format;
    }
    let config = config::finalize(config)?;

    observability::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        log_format = %config.observability.log_format,
        "service-two starting"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
