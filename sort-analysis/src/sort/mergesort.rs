pub fn sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    sort_range(items, 0, items.len() - 1);
}

/// Sorts the inclusive range `[left, right]` of `items`.
pub fn sort_range<T: Ord + Clone>(items: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }

    let middle = (left + right) / 2;
    sort_range(items, left, middle);
    sort_range(items, middle + 1, right);
    merge(items, left, middle, right);
}

fn merge<T: Ord + Clone>(items: &mut [T], left: usize, middle: usize, right: usize) {
    let mut merged = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = middle + 1;

    while i <= middle && j <= right {
        // taking from the left run on ties is what keeps the sort stable
        if items[i] <= items[j] {
            merged.push(items[i].clone());
            i += 1;
        } else {
            merged.push(items[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&items[i..=middle]);
    merged.extend_from_slice(&items[j..=right]);

    for (slot, item) in items[left..=right].iter_mut().zip(merged) {
        *slot = item;
    }
}
