#![deny(clippy::pedantic)]

use anyhow::{Context, Result};
use structopt::StructOpt;

mod args;
mod cli;
mod minimal_logger;

use args::BulbcloudArgs;
use minimal_logger::MinimalLogger;

static MIN_LOGGER: MinimalLogger = MinimalLogger;

fn main() -> Result<()> {
    log::set_logger(&MIN_LOGGER).context("Failed to install the logger.")?;
    log::set_max_level(log::LevelFilter::Info);

    match BulbcloudArgs::from_args() {
        BulbcloudArgs::Sample(sample_args) => cli::sample::sample_with_cli(sample_args)?,
        BulbcloudArgs::Evaluate(evaluate_args) => {
            cli::evaluate::evaluate_with_cli(&evaluate_args)?;
        },
    }

    log::logger().flush();

    Ok(())
}
