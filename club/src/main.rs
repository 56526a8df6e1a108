//! Computer club simulator binary.
//!
//! Reads a day's input file, replays it and prints the output log on
//! stdout. Diagnostics go to stderr.

use anyhow::Context;
use computer_club::{cli::Cli, parse_input, run_day, write_log, Config};
use std::io::{self, BufWriter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::from_env().with_overrides(cli.log_level, cli.format);

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let input = match parse_input(&raw) {
        Ok(input) => input,
        Err(error) => {
            tracing::warn!(?error, "Input rejected");
            println!("{error}");
            return Ok(());
        },
    };

    let log = run_day(input.config, input.events).context("simulation aborted")?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_log(&mut stdout, &log, config.output_format).context("failed to write output")?;
    Ok(())
}
