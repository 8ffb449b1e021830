//! DealDesk - command-line client for the deal-desk workflow API

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use dealdesk_lib::utils::logging::init_tracing;
use dealdesk_lib::{execute, AppContext, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the CLI reads environment-backed flags
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    let ctx = AppContext::new().context("failed to initialize application context")?;
    let output = execute(&ctx, cli.command).await?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output).context("failed to write output")?;
    writeln!(stdout).context("failed to write output")?;
    Ok(())
}
