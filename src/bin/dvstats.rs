use anyhow::{Context, Result};
use dvstats::app::App;
use dvstats::cli::Cli;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse_args();
    let mut app = App::new(cli);
    app.run(io::stdin().lock(), io::stdout().lock())
        .context("dvstats failed")?;

    Ok(())
}
