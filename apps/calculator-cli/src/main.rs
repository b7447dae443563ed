use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use calculator::LocalCalculatorClient;
use calculator_keypad::{Keypad, parse_keys};
use calculator_sdk::{CalculatorClient, CalculatorHttpClient, DEFAULT_BASE_URL, HttpClientConfig};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Calculator keypad in the terminal.
///
/// Type keys (`0`-`9`, `.`, `+`, `-`, `*`, `/`, `=`, `AC`) and press Enter;
/// the screen is printed after each line. `q` or end of input quits.
#[derive(Parser)]
#[command(name = "calculator-cli")]
#[command(version)]
struct Cli {
    /// Base URL of the calculation service
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    server: String,

    /// Evaluate in-process instead of calling the service
    #[arg(long, conflicts_with = "server")]
    local: bool,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_client(cli: &Cli) -> Result<Arc<dyn CalculatorClient>> {
    if cli.local {
        return Ok(Arc::new(LocalCalculatorClient::default()));
    }
    let client = CalculatorHttpClient::new(HttpClientConfig {
        base_url: cli.server.clone(),
        request_timeout: cli.timeout_ms.map(Duration::from_millis),
        ..HttpClientConfig::default()
    })?;
    tracing::info!(endpoint = %client.endpoint(), "using remote calculation service");
    Ok(Arc::new(client))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut keypad = Keypad::new(build_client(&cli)?);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        match parse_keys(line) {
            Ok(keys) => {
                for key in keys {
                    keypad.press(key).await;
                }
                stdout
                    .write_all(format!("{}\n", keypad.screen()).as_bytes())
                    .await?;
            }
            Err(e) => {
                stdout.write_all(format!("? {e}\n").as_bytes()).await?;
            }
        }
        stdout.flush().await?;
    }

    Ok(())
}
