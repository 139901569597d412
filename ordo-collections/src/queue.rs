//! Bounded FIFO queue over a ring buffer.
//!
//! The buffer is allocated once at construction. Elements occupy the range
//! `[head, head + len)` modulo the capacity; `pop` advances `head`, so the
//! slot it frees is reused by a later `push`.
//!
//! ```text
//!            head        tail = (head + len) % capacity
//!             v           v
//! [ _ | _ | a | b | c | _ ]
//! ```

use log::debug;

use crate::{Error, Result};

/// A first-in first-out queue holding at most `capacity` elements.
///
/// # Example
///
/// ```
/// use ordo_collections::BoundedQueue;
///
/// let mut queue: BoundedQueue<u64> = BoundedQueue::with_capacity(2);
/// queue.push(1).unwrap();
/// queue.push(2).unwrap();
/// assert!(queue.push(3).is_err());
///
/// assert_eq!(queue.pop(), Some(1));
/// queue.push(3).unwrap();
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), Some(3));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    buffer: Box<[Option<T>]>,
    /// Slot of the oldest element.
    head: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue that holds at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if another push would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    /// Appends `item` at the back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the queue is full. The item is
    /// dropped and the queue is unchanged.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            debug!("rejecting queue push: capacity {} reached", self.capacity());
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        let tail = self.slot(self.len);
        self.buffer[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let item = self.buffer[self.head].take();
        self.head = self.slot(1);
        self.len -= 1;
        item
    }

    /// Returns the oldest element without removing it.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buffer[self.head].as_ref()
    }

    /// Returns an iterator from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    /// Drops every queued element.
    pub fn clear(&mut self) {
        for slot in self.buffer.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Buffer slot `offset` places after `head`. Only called with a
    /// non-zero capacity.
    #[inline]
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.buffer.len()
    }
}

/// Iterator over a queue's elements, oldest first.
pub struct Iter<'a, T> {
    queue: &'a BoundedQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset == self.queue.len {
            return None;
        }
        let slot = self.queue.slot(self.offset);
        self.offset += 1;
        self.queue.buffer[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
