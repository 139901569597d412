//! Singly-linked sequential list with positional access.
//!
//! Nodes are stored in an arena owned by the list and linked forward by
//! index. Positions are 0-based: `insert(0, x)` makes `x` the new head,
//! `insert(len, x)` appends.
//!
//! Positional operations walk from the head, carrying the predecessor of the
//! current node, so they run in O(position) time without recursion.
//!
//! # Example
//!
//! ```
//! use ordo_collections::SeqList;
//!
//! let mut list: SeqList<char> = SeqList::new();
//! list.insert(0, 'a').unwrap();
//! list.insert(1, 'c').unwrap();
//! list.insert(1, 'b').unwrap();
//!
//! assert_eq!(list.get(1), Some(&'b'));
//! assert_eq!(list.remove(0), Ok('a'));
//! assert_eq!(list.iter().collect::<String>(), "bc");
//!
//! assert!(list.insert(5, 'z').is_err());
//! ```

use std::marker::PhantomData;

use log::trace;

use crate::{Arena, Error, Index, Result, Storage};

/// Type alias for list storage backed by `slab::Slab`.
#[cfg(feature = "slab")]
pub type SlabListStorage<T> = slab::Slab<ListNode<T, usize>>;

/// A node in the list.
///
/// Wraps user data with a forward link; users interact with `&T` and
/// `&mut T` through the list's accessors.
#[derive(Debug, Clone)]
pub struct ListNode<T, Idx: Index = u32> {
    pub(crate) data: T,
    pub(crate) next: Idx,
}

/// A singly-linked list addressed by position.
#[derive(Debug, Clone)]
pub struct SeqList<T, S = Arena<ListNode<T>>, Idx: Index = u32> {
    storage: S,
    head: Idx,
    _marker: PhantomData<T>,
}

impl<T, S, Idx> Default for SeqList<T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx> + Default,
    Idx: Index,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, Idx> SeqList<T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
    Idx: Index,
{
    /// Creates an empty list.
    pub fn new() -> Self
    where
        S: Default,
    {
        Self::with_storage(S::default())
    }

    /// Creates an empty list over the given storage.
    ///
    /// # Panics
    ///
    /// Panics if `storage` already holds nodes.
    pub fn with_storage(storage: S) -> Self {
        assert!(storage.is_empty(), "list storage must start empty");
        Self {
            storage,
            head: Idx::NONE,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `item` so that it ends up at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfRange`] if `position > len`.
    pub fn insert(&mut self, position: usize, item: T) -> Result<()> {
        let len = self.len();
        if position > len {
            return Err(Error::PositionOutOfRange { position, len });
        }

        let prev = self.predecessor(position);
        let next = self.successor_of(prev);
        let idx = self.storage.insert(ListNode { data: item, next });
        self.set_successor(prev, idx);
        trace!("linked node {:?} at position {}", idx, position);
        Ok(())
    }

    /// Removes and returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfRange`] if `position >= len`.
    pub fn remove(&mut self, position: usize) -> Result<T> {
        let len = self.len();
        if position >= len {
            return Err(Error::PositionOutOfRange { position, len });
        }

        let prev = self.predecessor(position);
        let target = self.successor_of(prev);
        let next = self.node(target).next;
        self.set_successor(prev, next);
        trace!("unlinked node {:?} at position {}", target, position);
        Ok(self.release(target).data)
    }

    /// Returns the element at `position`.
    pub fn get(&self, position: usize) -> Option<&T> {
        let idx = self.index_at(position)?;
        self.storage.get(idx).map(|node| &node.data)
    }

    /// Returns the element at `position` mutably.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        let idx = self.index_at(position)?;
        self.storage.get_mut(idx).map(|node| &mut node.data)
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.storage.get(self.head).map(|node| &node.data)
    }

    /// Prepends `item`.
    pub fn push_front(&mut self, item: T) {
        let idx = self.storage.insert(ListNode {
            data: item,
            next: self.head,
        });
        self.head = idx;
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let node = self.release(self.head);
        self.head = node.next;
        Some(node.data)
    }

    /// Returns an iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T, S, Idx> {
        Iter {
            storage: &self.storage,
            next: self.head,
            remaining: self.len(),
            _marker: PhantomData,
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.head = Idx::NONE;
    }

    /// Index of the node before `position`, `Idx::NONE` for the head slot.
    ///
    /// Caller guarantees `position <= len`.
    fn predecessor(&self, position: usize) -> Idx {
        let mut prev = Idx::NONE;
        let mut idx = self.head;
        for _ in 0..position {
            prev = idx;
            idx = self.node(idx).next;
        }
        prev
    }

    fn index_at(&self, position: usize) -> Option<Idx> {
        if position >= self.len() {
            return None;
        }
        Some(self.successor_of(self.predecessor(position)))
    }

    #[inline]
    fn successor_of(&self, prev: Idx) -> Idx {
        if prev.is_none() {
            self.head
        } else {
            self.node(prev).next
        }
    }

    #[inline]
    fn set_successor(&mut self, prev: Idx, next: Idx) {
        if prev.is_none() {
            self.head = next;
        } else {
            self.node_mut(prev).next = next;
        }
    }

    /// Index of the last node, `Idx::NONE` if empty.
    fn tail(&self) -> Idx {
        let mut tail = Idx::NONE;
        let mut idx = self.head;
        while idx.is_some() {
            tail = idx;
            idx = self.node(idx).next;
        }
        tail
    }

    #[inline]
    fn node(&self, idx: Idx) -> &ListNode<T, Idx> {
        self.storage
            .get(idx)
            .expect("list link points at a vacant slot")
    }

    #[inline]
    fn node_mut(&mut self, idx: Idx) -> &mut ListNode<T, Idx> {
        self.storage
            .get_mut(idx)
            .expect("list link points at a vacant slot")
    }

    #[inline]
    fn release(&mut self, idx: Idx) -> ListNode<T, Idx> {
        self.storage
            .remove(idx)
            .expect("list link points at a vacant slot")
    }
}

impl<T, S, Idx> Extend<T> for SeqList<T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
    Idx: Index,
{
    /// Appends every item, walking to the tail once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail();
        for item in iter {
            let idx = self.storage.insert(ListNode {
                data: item,
                next: Idx::NONE,
            });
            self.set_successor(tail, idx);
            tail = idx;
        }
    }
}

impl<T, S, Idx> FromIterator<T> for SeqList<T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx> + Default,
    Idx: Index,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T, S, Idx> IntoIterator for &'a SeqList<T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
    Idx: Index,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a list's elements, head to tail.
pub struct Iter<'a, T, S, Idx: Index> {
    storage: &'a S,
    next: Idx,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, S, Idx> Iterator for Iter<'a, T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
    Idx: Index + 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.storage.get(self.next)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, S, Idx> ExactSizeIterator for Iter<'a, T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
    Idx: Index + 'a,
{
}
