//! sharecheck CLI
//!
//! Preflight confidentiality scanner client: submits text to a running
//! sharecheck service and prints the verdict.

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use sharecheck_client::{HttpTransport, RenderSink, ScanClient};
use sharecheck_core::{Provider, ScanPhase};

mod config;
mod sink;

use config::ClientConfig;
use sink::{JsonSink, TerminalSink};

#[derive(Parser, Debug)]
#[command(name = "sharecheck")]
#[command(about = "Preflight confidentiality scanner for prompts and text", long_about = None)]
pub struct Cli {
    /// Text to analyze. If omitted, reads from stdin.
    pub text: Option<String>,

    /// Analysis provider (local, llm, auto)
    #[arg(short, long, value_parser = parse_provider)]
    pub provider: Option<Provider>,

    /// Output the normalized result as JSON
    #[arg(long)]
    pub json: bool,

    /// Base URL of the analysis service
    #[arg(short, long, env = "SHARECHECK_SERVER")]
    pub server: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "sharecheck.yaml")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_provider(s: &str) -> Result<Provider, String> {
    s.parse()
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = ClientConfig::load(&cli.config, &cli)?;
    info!(server = %config.server_url, provider = %config.provider, "starting sharecheck");

    let text = match input_text(&cli)? {
        Some(text) => text,
        None => {
            eprintln!("No input text provided.");
            return Ok(ExitCode::from(2));
        }
    };

    let transport = Arc::new(HttpTransport::new(&config.server_url));
    let sink: Arc<dyn RenderSink> = if cli.json {
        Arc::new(JsonSink)
    } else {
        Arc::new(TerminalSink)
    };
    let client = ScanClient::new(transport, sink);

    // One-shot liveness check; the outcome never gates the scan.
    client.probe_health().await;

    client.scan(&text, config.provider).await;

    Ok(match client.phase() {
        ScanPhase::Succeeded => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

/// Positional text, or stdin when omitted
fn input_text(cli: &Cli) -> Result<Option<String>> {
    let text = match &cli.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let text = text.trim().to_string();
    Ok((!text.is_empty()).then_some(text))
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("sharecheck=debug,sharecheck_client=debug,sharecheck_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sharecheck=info,sharecheck_client=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
