use anyhow::{Context, Result};
use clap::Parser;

use xlsx_structure::config::{Cli, Config};
use xlsx_structure::logging;

fn main() -> Result<()> {
    // Missing or extra arguments exit here, before any file is touched
    let cli = Cli::parse();

    // Initialize logging
    logging::init_logging()?;
    let config = Config::try_from(cli)?;

    let summaries = xlsx_structure::run(&config)
        .with_context(|| format!("Failed to analyze {}", config.input_path.display()))?;

    tracing::info!(
        "Wrote {} ({} sheets)",
        config.output_path.display(),
        summaries.len()
    );

    Ok(())
}
