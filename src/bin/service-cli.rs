use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "service-cli")]
#[command(about = "Query a running service-2 instance", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3001")]
    url: String,

    /// Request ID to send as x-request-id
    #[arg(short, long)]
    request_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Service greeting and instance info
    Info,
    /// Liveness probe
    Health,
    /// Have service-2 call service-1 once
    CallUpstream,
    /// Have service-2 call service-1's root and health together
    Chain,
    /// Emit one log line per level on the service
    TestLogs,
    /// Trigger the simulated error route
    Error,
}

impl Commands {
    fn path(&self) -> &'static str {
        match self {
            Commands::Info => "/",
            Commands::Health => "/health",
            Commands::CallUpstream => "/call-service1",
            Commands::Chain => "/chain",
            Commands::TestLogs => "/test-logs",
            Commands::Error => "/error",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = format!("{}{}", cli.url.trim_end_matches('/'), cli.command.path());
    let mut request = client.get(url);
    if let Some(id) = &cli.request_id {
        request = request.header("x-request-id", id);
    }

    let res = request.send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("{}", rendered);
        return Ok(());
    }

    println!("{}", rendered);
    Ok(())
}
