//! Heap sort in the two call shapes callers use.

use log::debug;

use super::{build_heap_by, sift_down_by, PriorityQueue};

/// Sorts `a` ascending in place.
///
/// Builds a max-heap over the whole slice, then repeatedly swaps the root
/// with the last element of the shrinking heap and sifts the new root down.
///
/// ```
/// use ordo_collections::heap::heap_sort;
///
/// let mut a = [5, 3, 8, 1, 4];
/// heap_sort(&mut a);
/// assert_eq!(a, [1, 3, 4, 5, 8]);
/// ```
pub fn heap_sort<T: Ord>(a: &mut [T]) {
    let mut greater = gt::<T>;

    build_heap_by(a, &mut greater);
    for end in (1..a.len()).rev() {
        a.swap(0, end);
        sift_down_by(&mut a[..end], 0, &mut greater);
    }
}

/// Sorts `items` ascending by bulk-loading a [`PriorityQueue`] and draining
/// it with `delete_min`.
///
/// ```
/// use ordo_collections::heap::sort_by_draining;
///
/// assert_eq!(sort_by_draining(vec![5, 3, 8, 1, 4]), vec![1, 3, 4, 5, 8]);
/// ```
pub fn sort_by_draining<T: Ord>(items: Vec<T>) -> Vec<T> {
    debug!("draining {} items through a priority queue", items.len());
    PriorityQueue::from(items).into_sorted_vec()
}

#[inline]
fn gt<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}
