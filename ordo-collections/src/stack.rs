//! Bounded LIFO stack over a fixed buffer.

use log::debug;

use crate::{Error, Result};

/// A last-in first-out stack holding at most `capacity` elements.
///
/// # Example
///
/// ```
/// use ordo_collections::BoundedStack;
///
/// let mut stack: BoundedStack<&str> = BoundedStack::with_capacity(2);
/// stack.push("a").unwrap();
/// stack.push("b").unwrap();
/// assert!(stack.push("c").is_err());
///
/// assert_eq!(stack.peek(), Some(&"b"));
/// assert_eq!(stack.pop(), Some("b"));
/// assert_eq!(stack.pop(), Some("a"));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    /// Bottom of the stack at offset 0; never grows past `capacity`.
    buffer: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack that holds at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of stacked elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing is stacked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` if another push would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Pushes `item` on top.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the stack is full. The item is
    /// dropped and the stack is unchanged.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            debug!("rejecting stack push: capacity {} reached", self.capacity);
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.buffer.push(item);
        Ok(())
    }

    /// Removes and returns the top element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.buffer.pop()
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.buffer.last()
    }

    /// Returns an iterator from top to bottom.
    pub fn iter(&self) -> core::iter::Rev<core::slice::Iter<'_, T>> {
        self.buffer.iter().rev()
    }

    /// Drops every stacked element.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
