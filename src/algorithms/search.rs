//! Binary search over slices sorted in ascending order.
//!
//! Both functions only report whether `target` is present. If `items` isn't sorted, the result is
//! unspecified but the search still terminates.

use std::cmp::Ordering;

/// Returns true if `target` is an element of `items`, using an iterative binary search.
///
/// # Time Complexity
/// `O(log n)` comparisons.
///
/// # Examples
/// ```
/// # use basic_structures::algorithms::search::binary_search;
/// let items = [1, 3, 5, 7, 9];
/// assert!(binary_search(&items, &7));
/// assert!(!binary_search(&items, &4));
/// assert!(!binary_search(&[] as &[i32], &4));
/// ```
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> bool {
    // Searches within [low, high).
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return true,
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    false
}

/// Returns true if `target` is an element of `items`, recursing on the half of the slice that can
/// still contain it.
///
/// # Time Complexity
/// `O(log n)` comparisons, with a recursion depth of `O(log n)`.
pub fn binary_search_recursive<T: Ord>(items: &[T], target: &T) -> bool {
    if items.is_empty() {
        return false;
    }

    let mid = items.len() / 2;
    match items[mid].cmp(target) {
        Ordering::Equal => true,
        Ordering::Less => binary_search_recursive(&items[mid + 1..], target),
        Ordering::Greater => binary_search_recursive(&items[..mid], target),
    }
}
