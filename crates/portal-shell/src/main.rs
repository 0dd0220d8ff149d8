use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use portal_shell::{init_tracing, run_cli, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let html = run_cli(&cli).await?;

    match &cli.out {
        Some(path) => std::fs::write(path, format!("{html}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}").context("failed to write document to stdout")?;
        }
    }
    Ok(())
}
