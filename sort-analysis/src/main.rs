use std::env;

use anyhow::Context;
use sort_analysis::{config::Config, error::HarnessError};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match Config::from_args(env::args_os()) {
        Ok(config) => config,
        Err(HarnessError::Usage(usage)) => {
            println!("{usage}");
            return Ok(());
        }
        Err(HarnessError::Help(help)) => help.exit(),
        Err(err) => return Err(err).context("Failed to parse arguments"),
    };

    let report = match sort_analysis::run_experiment(&config) {
        Ok(report) => report,
        Err(err @ HarnessError::FileRead(..)) => {
            println!("{err}");
            return Ok(());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to run {}", config.algorithm))
        }
    };

    println!("{report}");

    for failure in sort_analysis::persist(&config, &report) {
        println!("{failure}");
    }

    Ok(())
}
