use std::{fmt, str::FromStr};

use crate::error::HarnessError;

pub mod bubblesort;
pub mod heapsort;
pub mod mergesort;
pub mod quicksort;
pub mod transposition;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Merge,
    Quick,
    Heap,
    Bubble,
    Transposition,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Bubble,
        Algorithm::Transposition,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Bubble => "bubble",
            Algorithm::Transposition => "transposition",
        }
    }

    /// Sorts `items` in place. Only bubble and transposition sort count their
    /// comparisons, the others return `None`.
    pub fn sort<T: Ord + Clone>(&self, items: &mut [T]) -> Option<u64> {
        match self {
            Algorithm::Merge => {
                mergesort::sort(items);
                None
            }
            Algorithm::Quick => {
                quicksort::sort(items);
                None
            }
            Algorithm::Heap => {
                heapsort::sort(items);
                None
            }
            Algorithm::Bubble => Some(bubblesort::sort(items)),
            Algorithm::Transposition => Some(transposition::sort(items)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == lowered)
            .ok_or_else(|| HarnessError::InvalidAlgorithm(s.to_owned()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
