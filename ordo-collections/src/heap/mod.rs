//! Binary min-heap over a fixed-capacity contiguous buffer.
//!
//! The heap is array-encoded: the root sits at offset 0, the children of
//! offset `i` at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. Every
//! element is `>=` its parent, so the root is the global minimum.
//!
//! Two repair operations keep that property across mutation:
//!
//! ```text
//! insert      append leaf  -> sift up   (swap with parent while parent > item)
//! delete_min  last -> root -> sift down (swap with smaller child while child < item)
//! ```
//!
//! The same sift routines are exposed over caller-owned slices
//! ([`heapify`], [`build_heap`]) for the in-place [`heap_sort`].

mod sort;

pub use sort::{heap_sort, sort_by_draining};

use log::debug;

use crate::{Error, Result};

/// A min-heap priority queue with a capacity fixed at construction.
///
/// The buffer is allocated once; an insert into a full queue is rejected
/// with [`Error::CapacityExceeded`] and leaves the queue untouched.
///
/// # Example
///
/// ```
/// use ordo_collections::PriorityQueue;
///
/// let mut pq: PriorityQueue = PriorityQueue::with_capacity(5);
/// for key in [5, 3, 8, 1, 4] {
///     pq.insert(key).unwrap();
/// }
///
/// assert_eq!(pq.find_min(), Ok(&1));
/// assert_eq!(pq.delete_min(), Ok(1));
/// assert_eq!(pq.find_min(), Ok(&3));
///
/// // Full
/// pq.insert(0).unwrap();
/// assert!(pq.insert(2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T = i64> {
    /// Heap-ordered elements, `buffer.len()` is the live size.
    buffer: Vec<T>,
    capacity: usize,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue that holds at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Bulk-loads `items` into a queue of the given capacity.
    ///
    /// Uses bottom-up construction (sift-down from the last internal node to
    /// the root), which is linear rather than `n` separate inserts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `items` yields more than
    /// `capacity` elements.
    pub fn build<I>(capacity: usize, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut buffer = Vec::with_capacity(capacity);
        for item in items {
            if buffer.len() == capacity {
                debug!("rejecting heap build: more than {} items", capacity);
                return Err(Error::CapacityExceeded { capacity });
            }
            buffer.push(item);
        }

        build_heap(&mut buffer);
        debug!("built heap of {} items, capacity {}", buffer.len(), capacity);
        Ok(Self { buffer, capacity })
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` if another insert would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts an element, sifting it up from the new leaf.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the queue is full. The item is
    /// dropped and the queue is unchanged.
    pub fn insert(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            debug!("rejecting heap insert: capacity {} reached", self.capacity);
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.buffer.push(item);
        let pos = self.buffer.len() - 1;
        sift_up_by(&mut self.buffer, pos, &mut lt::<T>);
        Ok(())
    }

    /// Returns the minimum element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    #[inline]
    pub fn find_min(&self) -> Result<&T> {
        self.buffer.first().ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the minimum element.
    ///
    /// The last leaf replaces the root and is sifted down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    pub fn delete_min(&mut self) -> Result<T> {
        if self.buffer.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let min = self.buffer.swap_remove(0);
        sift_down_by(&mut self.buffer, 0, &mut lt::<T>);
        Ok(min)
    }

    /// Returns the elements in heap (not sorted) order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Removes every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Drains the queue into a vector in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(min) = self.delete_min() {
            sorted.push(min);
        }
        sorted
    }
}

impl<T: Ord> From<Vec<T>> for PriorityQueue<T> {
    /// Heapifies `items` in place; the capacity equals the input length.
    fn from(mut items: Vec<T>) -> Self {
        build_heap(&mut items);
        let capacity = items.len();
        Self {
            buffer: items,
            capacity,
        }
    }
}

// =============================================================================
// Slice routines
// =============================================================================

/// Sifts `a[index]` down until neither child is smaller.
///
/// The slice length is the heap bound: pass `&mut a[..bound]` to heapify a
/// prefix. An `index` without children is left as is.
///
/// ```
/// use ordo_collections::heap::{heapify, is_heap};
///
/// let mut a = [9, 2, 3, 4, 5];
/// heapify(&mut a, 0);
/// assert!(is_heap(&a));
/// assert_eq!(a[0], 2);
/// ```
///
/// The ordering is min-first. Sorting with [`build_heap`], a root-to-end
/// swap and `heapify` over the shrinking prefix therefore leaves the slice
/// in *descending* order; [`heap_sort`] uses a max ordering to sort
/// ascending.
///
/// ```
/// use ordo_collections::heap::{build_heap, heapify};
///
/// let mut a = [5, 3, 8, 1, 4];
/// build_heap(&mut a);
/// for end in (1..a.len()).rev() {
///     a.swap(0, end);
///     heapify(&mut a[..end], 0);
/// }
/// assert_eq!(a, [8, 5, 4, 3, 1]);
/// ```
pub fn heapify<T: Ord>(a: &mut [T], index: usize) {
    sift_down_by(a, index, &mut lt::<T>);
}

/// Rearranges `a` into a min-heap in linear time.
pub fn build_heap<T: Ord>(a: &mut [T]) {
    build_heap_by(a, &mut lt::<T>);
}

/// Returns `true` if every element of `a` is `>=` its parent.
pub fn is_heap<T: Ord>(a: &[T]) -> bool {
    (1..a.len()).all(|i| a[(i - 1) / 2] <= a[i])
}

/// Bottom-up construction: sift down every internal node, last one first.
pub(crate) fn build_heap_by<T, F>(a: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in (0..a.len() / 2).rev() {
        sift_down_by(a, i, less);
    }
}

#[inline]
pub(crate) fn lt<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

fn sift_up_by<T, F>(a: &mut [T], mut pos: usize, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while pos > 0 {
        let parent = (pos - 1) / 2;
        if !less(&a[pos], &a[parent]) {
            break;
        }
        a.swap(pos, parent);
        pos = parent;
    }
}

/// Swap-based sift-down. The right sibling is chosen only when strictly
/// smaller than the left one.
pub(crate) fn sift_down_by<T, F>(a: &mut [T], mut pos: usize, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = a.len();
    loop {
        let left = 2 * pos + 1;
        if left >= len {
            break;
        }

        let right = left + 1;
        let child = if right < len && less(&a[right], &a[left]) {
            right
        } else {
            left
        };

        if !less(&a[child], &a[pos]) {
            break;
        }
        a.swap(pos, child);
        pos = child;
    }
}
