pub fn sort<T: Ord>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    sort_range(items, 0, items.len() - 1);
}

/// Sorts the inclusive range `[left, right]` of `items` using the rightmost
/// element of every range as the pivot.
///
/// Sorted and reverse sorted input both degrade to quadratic work. Only the
/// smaller side of a partition is recursed into, the larger one is handled by
/// the loop, so stack depth stays logarithmic even then.
pub fn sort_range<T: Ord>(items: &mut [T], left: usize, right: usize) {
    let (mut left, mut right) = (left, right);

    while left < right {
        let pivot_index = partition(items, left, right);
        let left_len = pivot_index - left;
        let right_len = right - pivot_index;

        if left_len < right_len {
            if pivot_index > left {
                sort_range(items, left, pivot_index - 1);
            }
            left = pivot_index + 1;
        } else {
            sort_range(items, pivot_index + 1, right);
            if pivot_index == left {
                break;
            }
            right = pivot_index - 1;
        }
    }
}

/// Lomuto partition of `[left, right]`. Returns the final index of the pivot.
pub fn partition<T: Ord>(items: &mut [T], left: usize, right: usize) -> usize {
    // `boundary` is one past the last element known to be <= pivot
    let mut boundary = left;

    for j in left..right {
        if items[j] <= items[right] {
            items.swap(boundary, j);
            boundary += 1;
        }
    }
    items.swap(boundary, right);
    boundary
}
