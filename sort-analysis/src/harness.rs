use std::{
    fmt,
    time::{Duration, Instant},
};

use itertools::Itertools;
use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::sort::Algorithm;

/// The three starting arrangements every run sorts, in the order they are
/// processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    AlreadySorted,
    Shuffled,
    Reversed,
}

impl Distribution {
    pub const ALL: [Distribution; 3] = [
        Distribution::AlreadySorted,
        Distribution::Shuffled,
        Distribution::Reversed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Distribution::AlreadySorted => "Already-Sorted",
            Distribution::Shuffled => "Shuffled",
            Distribution::Reversed => "Reversed",
        }
    }

    pub fn arrange<R: Rng + ?Sized>(&self, words: &[String], rng: &mut R) -> Vec<String> {
        match self {
            Distribution::AlreadySorted => words.iter().cloned().sorted().collect_vec(),
            Distribution::Shuffled => {
                let mut shuffled = words.to_vec();
                shuffled.shuffle(rng);
                shuffled
            }
            Distribution::Reversed => words
                .iter()
                .cloned()
                .sorted_by(|a, b| b.cmp(a))
                .collect_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub distribution: Distribution,
    pub elapsed: Option<Duration>,
    pub comparisons: Option<u64>,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.distribution.label();
        if let Some(comparisons) = self.comparisons {
            writeln!(f, "{label} Comparisons: {comparisons}")?;
        }
        if let Some(elapsed) = self.elapsed {
            writeln!(f, "{label} Time: {} ns", elapsed.as_nanos())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub lines_requested: usize,
    pub algorithm: Algorithm,
    pub measurements: Vec<Measurement>,
    /// Sorted words of the last processed distribution.
    pub sorted: Vec<String>,
}

impl Report {
    /// The report flattened into one `lines,algorithm,report` record with
    /// its line breaks replaced by `;`.
    pub fn log_line(&self) -> String {
        format!(
            "{},{},{}",
            self.lines_requested,
            self.algorithm,
            self.to_string().replace('\n', ";")
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lines Evaluated: {}", self.lines_requested)?;
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        for measurement in &self.measurements {
            write!(f, "{measurement}")?;
        }
        Ok(())
    }
}

/// Sorts a fresh copy of every distribution of `words` with `algorithm`.
pub fn run<R: Rng + ?Sized>(
    words: &[String],
    algorithm: Algorithm,
    lines_requested: usize,
    rng: &mut R,
) -> Report {
    let mut measurements = Vec::with_capacity(Distribution::ALL.len());
    let mut sorted = Vec::new();

    for distribution in Distribution::ALL {
        let mut items = distribution.arrange(words, rng);
        let (elapsed, comparisons) = measure(algorithm, &mut items);
        let measurement = Measurement {
            distribution,
            elapsed,
            comparisons,
        };
        debug!("{algorithm} on {}: {measurement:?}", distribution.label());
        measurements.push(measurement);
        sorted = items;
    }

    Report {
        lines_requested,
        algorithm,
        measurements,
        sorted,
    }
}

/// Bubble sort reports time and comparisons, transposition sort only
/// comparisons and the remaining sorts only time.
fn measure(algorithm: Algorithm, items: &mut [String]) -> (Option<Duration>, Option<u64>) {
    let start = Instant::now();
    let comparisons = algorithm.sort(items);
    let elapsed = start.elapsed();

    match algorithm {
        Algorithm::Transposition => (None, comparisons),
        _ => (Some(elapsed), comparisons),
    }
}
