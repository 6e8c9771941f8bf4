pub fn sort<T: Ord>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    sort_range(items, 0, items.len() - 1);
}

/// Heap sorts the inclusive range `[left, right]`. The heap is laid out
/// relative to `left`, so index 0 of the heap is `items[left]`.
pub fn sort_range<T: Ord>(items: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }
    let items = &mut items[left..=right];
    let n = items.len();

    for i in (0..n / 2).rev() {
        heapify(items, n, i);
    }

    for i in (1..n).rev() {
        items.swap(0, i);
        heapify(items, i, 0);
    }
}

/// Sinks `items[i]` until the subtree rooted at `i` within the first `n`
/// elements is a max-heap again.
///
/// Indices are relative to the range `sort_range` sliced out, so the heap
/// root is always `items[0]` and the children of `i` are `2i + 1` and `2i + 2`.
fn heapify<T: Ord>(items: &mut [T], n: usize, i: usize) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && items[left] > items[largest] {
        largest = left;
    }

    if right < n && items[right] > items[largest] {
        largest = right;
    }

    if largest != i {
        items.swap(i, largest);
        heapify(items, n, largest);
    }
}
