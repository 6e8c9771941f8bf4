/// Bubble sorts `items` and returns the number of adjacent comparisons made.
///
/// A pass without a single swap ends the sort early, so sorted input costs
/// exactly one pass.
pub fn sort<T: Ord>(items: &mut [T]) -> u64 {
    let size = items.len();
    let mut comparisons = 0;

    for i in 0..size.saturating_sub(1) {
        let mut swapped = false;

        for j in 0..size - i - 1 {
            comparisons += 1;
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    comparisons
}
