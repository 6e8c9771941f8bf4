use std::{cell::Cell, cmp::Ordering, fmt::Debug, rc::Rc};

use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// A token that counts every ordering comparison made against it.
///
/// All probes of one sequence share the same counter so a sort's total
/// comparison work can be read back after the call.
#[derive(Debug, Clone)]
pub struct Probe {
    value: u32,
    comparisons: Rc<Cell<u64>>,
}

impl Probe {
    pub fn sequence(n: u32, descending: bool) -> (Vec<Probe>, Rc<Cell<u64>>) {
        let comparisons = Rc::new(Cell::new(0));
        let values = if descending {
            (0..n).rev().collect_vec()
        } else {
            (0..n).collect_vec()
        };
        let probes = values
            .into_iter()
            .map(|value| Probe {
                value,
                comparisons: Rc::clone(&comparisons),
            })
            .collect_vec();
        (probes, comparisons)
    }

    pub fn shuffled(n: u32, seed: u64) -> (Vec<Probe>, Rc<Cell<u64>>) {
        let (mut probes, comparisons) = Probe::sequence(n, false);
        probes.shuffle(&mut StdRng::seed_from_u64(seed));
        (probes, comparisons)
    }
}

impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Probe {}

impl PartialOrd for Probe {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Probe {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value.cmp(&other.value)
    }
}

pub fn assert_sorted_permutation<T: Ord + Clone + Debug>(input: &[T], output: &[T]) {
    let expected = input.iter().cloned().sorted().collect_vec();
    assert_eq!(output, expected.as_slice());
}
