use std::{ffi::OsString, path::PathBuf};

use clap::{error::ErrorKind, Parser};
use log::debug;

use crate::{error::HarnessError, sort::Algorithm};

pub const USAGE: &str =
    "Usage: sort-analysis {dataset-file} {sorting-algorithm-type} {number-of-lines}";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Newline delimited word list
    dataset_file: PathBuf,
    /// merge, quick, heap, bubble or transposition
    algorithm: String,
    /// How many lines of the dataset to sort
    #[arg(allow_negative_numbers = true)]
    number_of_lines: String,
    /// Log every run is appended to
    #[arg(long, default_value = "analysis.txt")]
    analysis_file: PathBuf,
    /// File the last sorted distribution is written to
    #[arg(long, default_value = "sorted.txt")]
    sorted_file: PathBuf,
    /// Seed for the shuffled distribution
    #[arg(long)]
    seed: Option<u64>,
    /// Anything after the line count is accepted and ignored
    #[arg(hide = true)]
    extra: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dataset_file: PathBuf,
    pub algorithm: Algorithm,
    pub number_of_lines: usize,
    pub analysis_file: PathBuf,
    pub sorted_file: PathBuf,
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, HarnessError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => HarnessError::Help(err),
            ErrorKind::MissingRequiredArgument => HarnessError::Usage(USAGE.to_owned()),
            _ => HarnessError::Usage(err.to_string()),
        })?;

        let number_of_lines = args
            .number_of_lines
            .trim()
            .parse::<usize>()
            .map_err(|err| HarnessError::NumberFormat(args.number_of_lines.clone(), err))?;
        let algorithm = args.algorithm.parse::<Algorithm>()?;
        if !args.extra.is_empty() {
            debug!("Ignoring extra arguments {:?}", args.extra);
        }

        Ok(Config {
            dataset_file: args.dataset_file,
            algorithm,
            number_of_lines,
            analysis_file: args.analysis_file,
            sorted_file: args.sorted_file,
            seed: args.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rstest::rstest;

    use super::{Config, USAGE};
    use crate::{error::HarnessError, sort::Algorithm};

    #[test]
    fn test_parses_positional_arguments_with_defaults() {
        let config = Config::from_args(["sort-analysis", "words.txt", "Merge", "100"]).unwrap();
        assert_eq!(
            config,
            Config {
                dataset_file: PathBuf::from("words.txt"),
                algorithm: Algorithm::Merge,
                number_of_lines: 100,
                analysis_file: PathBuf::from("analysis.txt"),
                sorted_file: PathBuf::from("sorted.txt"),
                seed: None,
            }
        );
    }

    #[test]
    fn test_parses_output_overrides_and_seed() {
        let config = Config::from_args([
            "sort-analysis",
            "words.txt",
            "bubble",
            "10",
            "--analysis-file",
            "out/log.csv",
            "--sorted-file",
            "out/sorted.txt",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(config.analysis_file, PathBuf::from("out/log.csv"));
        assert_eq!(config.sorted_file, PathBuf::from("out/sorted.txt"));
        assert_eq!(config.seed, Some(42));
    }

    #[rstest]
    #[case(vec!["sort-analysis"])]
    #[case(vec!["sort-analysis", "words.txt"])]
    #[case(vec!["sort-analysis", "words.txt", "merge"])]
    fn test_missing_arguments_is_a_usage_error(#[case] args: Vec<&str>) {
        let err = Config::from_args(args).unwrap_err();
        assert!(matches!(err, HarnessError::Usage(usage) if usage == USAGE));
    }

    #[rstest]
    #[case("ten")]
    #[case("-5")]
    #[case("3.5")]
    fn test_non_integer_line_count_is_a_number_format_error(#[case] lines: &str) {
        let err = Config::from_args(["sort-analysis", "words.txt", "merge", lines]).unwrap_err();
        assert!(matches!(err, HarnessError::NumberFormat(input, _) if input == lines));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let config =
            Config::from_args(["sort-analysis", "words.txt", "merge", "3", "extra", "more"])
                .unwrap();
        assert_eq!(config.algorithm, Algorithm::Merge);
        assert_eq!(config.number_of_lines, 3);
    }

    #[test]
    fn test_extra_arguments_do_not_swallow_options() {
        let config = Config::from_args([
            "sort-analysis",
            "words.txt",
            "heap",
            "3",
            "extra",
            "--seed",
            "9",
        ])
        .unwrap();
        assert_eq!(config.seed, Some(9));
    }

    #[rstest]
    #[case("--help")]
    #[case("--version")]
    fn test_help_and_version_are_returned_not_exited(#[case] flag: &str) {
        let err = Config::from_args(["sort-analysis", flag]).unwrap_err();
        assert!(matches!(err, HarnessError::Help(_)));
    }

    #[test]
    fn test_line_count_is_checked_before_algorithm() {
        let err = Config::from_args(["sort-analysis", "words.txt", "shell", "x"]).unwrap_err();
        assert!(matches!(err, HarnessError::NumberFormat(..)));
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let err = Config::from_args(["sort-analysis", "words.txt", "shell", "5"]).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidAlgorithm(name) if name == "shell"));
    }
}
