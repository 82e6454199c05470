use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tradedesk",
    about = "TradeDesk navigation shell - resolves paths to pages and renders them as JSON"
)]
struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Render a single path and exit instead of reading commands from stdin
    #[arg(short, long)]
    path: Option<String>,

    /// Pretty-print the output JSON (single-path mode only)
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (respects RUST_LOG env var)
    if cli.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let config = tradedesk::load_config(cli.config.as_deref())?;
    let mut shell = tradedesk::build_shell(&config).context("Failed to build navigation shell")?;

    if let Some(href) = &cli.path {
        let screen = shell.navigate(href);
        let output = if cli.pretty {
            serde_json::to_string_pretty(&screen)?
        } else {
            serde_json::to_string(&screen)?
        };
        println!("{output}");
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let signal = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Received shutdown signal");
        signal.cancel();
    });

    let replies = tradedesk::session::run_session(
        &mut shell,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        cancel,
    )
    .await?;

    tracing::info!(replies, "Session ended");
    Ok(())
}
