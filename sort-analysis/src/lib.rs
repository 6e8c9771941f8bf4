pub mod config;
pub mod error;
pub mod harness;
pub mod input;
pub mod output;
pub mod sort;

use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

use config::Config;
use error::HarnessError;
use harness::Report;

/// Loads the dataset and sorts its three distributions with the configured
/// algorithm.
pub fn run_experiment(config: &Config) -> Result<Report, HarnessError> {
    let words = input::read_words(&config.dataset_file, config.number_of_lines)?;
    info!(
        "Loaded {} words from {}, sorting with {}",
        words.len(),
        config.dataset_file.display(),
        config.algorithm
    );

    let report = match config.seed {
        Some(seed) => harness::run(
            &words,
            config.algorithm,
            config.number_of_lines,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => harness::run(
            &words,
            config.algorithm,
            config.number_of_lines,
            &mut rand::thread_rng(),
        ),
    };
    Ok(report)
}

/// Writes the analysis log and the sorted output. A failure of one does not
/// stop the other, every failure is returned.
pub fn persist(config: &Config, report: &Report) -> Vec<HarnessError> {
    let mut failures = Vec::new();

    match output::append_log(&config.analysis_file, report) {
        Ok(()) => info!("Appended results to {}", config.analysis_file.display()),
        Err(err) => {
            error!("Failed to append results: {err}");
            failures.push(err);
        }
    }
    match output::write_sorted(&config.sorted_file, &report.sorted) {
        Ok(()) => info!("Wrote sorted words to {}", config.sorted_file.display()),
        Err(err) => {
            error!("Failed to write sorted words: {err}");
            failures.push(err);
        }
    }

    failures
}
