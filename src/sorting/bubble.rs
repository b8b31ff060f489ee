use tracing::trace;

/// Sorts the slice in place in ascending order.
///
/// Repeatedly compares adjacent elements and swaps out-of-order pairs.
/// A pass that performs no swaps means the slice is fully ordered, so
/// sorting stops early; an already-sorted slice costs a single O(n) pass.
/// Equal elements are never swapped, so the sort is stable.
pub fn bubble_sort<T>(arr: &mut [T])
where
    T: Ord,
{
    let n = arr.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let mut swapped = false;
        // Last i elements are already in place
        for j in 0..(n - 1 - i) {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        trace!(pass = i, swapped, "pass complete");
        if !swapped {
            break;
        }
    }
}

/// Owned variant: consumes the vector and returns it sorted.
///
/// Callers that need to keep the original order must clone before calling.
pub fn bubble_sorted<T>(mut arr: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    bubble_sort(&mut arr);
    arr
}
