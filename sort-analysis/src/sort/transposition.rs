/// Odd-even transposition sort. Each cycle runs an odd pass over the pairs
/// `(1,2), (3,4), ..` and then an even pass over `(0,1), (2,3), ..`, and the
/// sort stops after the first cycle in which neither pass swapped anything.
///
/// Returns the number of comparisons made.
pub fn sort<T: Ord>(items: &mut [T]) -> u64 {
    let last_pair = items.len().saturating_sub(1);
    let mut comparisons = 0;
    let mut sorted = false;

    while !sorted {
        sorted = true;
        for start in [1, 0] {
            for i in (start..last_pair).step_by(2) {
                comparisons += 1;
                if items[i] > items[i + 1] {
                    items.swap(i, i + 1);
                    sorted = false;
                }
            }
        }
    }

    comparisons
}
