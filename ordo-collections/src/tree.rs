//! Unbalanced binary search tree over arena-allocated nodes.
//!
//! Nodes live in a [`Storage`] owned by the tree and link to their children
//! by index. Every key in a node's left subtree is smaller than the node's
//! key, every key in its right subtree is larger. Duplicates are rejected.
//!
//! There is no rebalancing: the height depends on insertion order, and a
//! sorted insertion sequence degrades to a list.
//!
//! # Deletion
//!
//! ```text
//! zero/one child:  parent.link(p) = p.child            release p
//!
//! two children:        p                    q.key
//!                     / \                   /   \
//!                    a   r        ->       a     r
//!                       /                       /
//!                     ...                     ...
//!                     /                       /
//!                    q   (leftmost of r)     q.right
//!                     \
//!                    q.right                 release q
//! ```
//!
//! # Example
//!
//! ```
//! use ordo_collections::OrderedTree;
//!
//! let mut tree: OrderedTree = OrderedTree::new();
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(&4));
//! assert!(!tree.insert(4)); // duplicate, no-op
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//!
//! assert!(tree.remove(&5));
//! assert!(!tree.remove(&5));
//! assert_eq!(tree.len(), 4);
//! ```

use std::marker::PhantomData;

use log::trace;

use crate::{Arena, Index, Storage};

/// Type alias for tree storage backed by `slab::Slab`.
#[cfg(feature = "slab")]
pub type SlabTreeStorage<K> = slab::Slab<TreeNode<K, usize>>;

/// A node in the tree.
///
/// Child links are storage indices, `Idx::NONE` when absent. Users reach
/// keys through the tree's accessors; the node layout is an implementation
/// detail.
#[derive(Debug, Clone)]
pub struct TreeNode<K, Idx: Index = u32> {
    pub(crate) key: K,
    pub(crate) left: Idx,
    pub(crate) right: Idx,
}

impl<K, Idx: Index> TreeNode<K, Idx> {
    #[inline]
    fn leaf(key: K) -> Self {
        Self {
            key,
            left: Idx::NONE,
            right: Idx::NONE,
        }
    }

    /// Returns the node's key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// The child slot a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link<Idx> {
    Root,
    Left(Idx),
    Right(Idx),
}

/// An unbalanced binary search tree of unique keys.
///
/// The tree owns its node storage. The default is an [`Arena`] with `u32`
/// links; with the `slab` feature, [`SlabTreeStorage`] runs the tree on
/// `slab::Slab`.
#[derive(Debug, Clone)]
pub struct OrderedTree<K = i64, S = Arena<TreeNode<K>>, Idx: Index = u32> {
    storage: S,
    root: Idx,
    _marker: PhantomData<K>,
}

impl<K, S, Idx> Default for OrderedTree<K, S, Idx>
where
    K: Ord,
    S: Storage<TreeNode<K, Idx>, Index = Idx> + Default,
    Idx: Index,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S, Idx> OrderedTree<K, S, Idx>
where
    K: Ord,
    S: Storage<TreeNode<K, Idx>, Index = Idx>,
    Idx: Index,
{
    /// Creates an empty tree.
    pub fn new() -> Self
    where
        S: Default,
    {
        Self::with_storage(S::default())
    }

    /// Creates an empty tree over the given storage.
    ///
    /// # Panics
    ///
    /// Panics if `storage` already holds nodes.
    pub fn with_storage(storage: S) -> Self {
        assert!(storage.is_empty(), "tree storage must start empty");
        Self {
            storage,
            root: Idx::NONE,
            _marker: PhantomData,
        }
    }

    /// Returns the number of keys in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the tree holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns `true` if `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).1.is_some()
    }

    /// Inserts `key` as a new leaf.
    ///
    /// Returns `false`, leaving the tree unchanged, if an equal key is
    /// already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (link, found) = self.find(&key);
        if found.is_some() {
            return false;
        }

        let idx = self.storage.insert(TreeNode::leaf(key));
        self.set_link(link, idx);
        true
    }

    /// Removes `key` from the tree.
    ///
    /// Returns `false` if the key is not present.
    pub fn remove(&mut self, key: &K) -> bool {
        let (link, target) = self.find(key);
        if target.is_none() {
            return false;
        }

        let (left, right) = {
            let node = self.node(target);
            (node.left, node.right)
        };

        if left.is_none() || right.is_none() {
            let child = if right.is_none() { left } else { right };
            trace!("splicing out node {:?} via {:?}", target, link);
            self.set_link(link, child);
            self.release(target);
            return true;
        }

        // Two children: promote the in-order successor's key.
        let mut parent = target;
        let mut succ = right;
        loop {
            let next = self.node(succ).left;
            if next.is_none() {
                break;
            }
            parent = succ;
            succ = next;
        }

        let succ_right = self.node(succ).right;
        if parent == target {
            self.node_mut(target).right = succ_right;
        } else {
            self.node_mut(parent).left = succ_right;
        }

        trace!("promoting successor {:?} into node {:?}", succ, target);
        let promoted = self.release(succ);
        self.node_mut(target).key = promoted.key;
        true
    }

    /// Returns the smallest key.
    pub fn first(&self) -> Option<&K> {
        let mut idx = self.root;
        let mut min = None;
        while idx.is_some() {
            let node = self.node(idx);
            min = Some(&node.key);
            idx = node.left;
        }
        min
    }

    /// Returns the largest key.
    pub fn last(&self) -> Option<&K> {
        let mut idx = self.root;
        let mut max = None;
        while idx.is_some() {
            let node = self.node(idx);
            max = Some(&node.key);
            idx = node.right;
        }
        max
    }

    /// Returns the key at the root.
    #[inline]
    pub fn root(&self) -> Option<&K> {
        self.storage.get(self.root).map(TreeNode::key)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if self.root.is_some() {
            stack.push((self.root, 1));
        }

        while let Some((idx, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(idx);
            for child in [node.left, node.right] {
                if child.is_some() {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K, S, Idx> {
        Iter::new(&self.storage, self.root, self.len())
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.root = Idx::NONE;
    }

    /// Descends from the root toward `key`.
    ///
    /// Returns the link the search ended on and the index of the node holding
    /// `key`, or `Idx::NONE` if absent (the link is then where `key` belongs).
    fn find(&self, key: &K) -> (Link<Idx>, Idx) {
        let mut link = Link::Root;
        let mut idx = self.root;

        while idx.is_some() {
            let node = self.node(idx);
            match key.cmp(&node.key) {
                core::cmp::Ordering::Less => {
                    link = Link::Left(idx);
                    idx = node.left;
                }
                core::cmp::Ordering::Greater => {
                    link = Link::Right(idx);
                    idx = node.right;
                }
                core::cmp::Ordering::Equal => break,
            }
        }
        (link, idx)
    }

    #[inline]
    fn set_link(&mut self, link: Link<Idx>, child: Idx) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.node_mut(parent).left = child,
            Link::Right(parent) => self.node_mut(parent).right = child,
        }
    }

    #[inline]
    fn node(&self, idx: Idx) -> &TreeNode<K, Idx> {
        self.storage
            .get(idx)
            .expect("tree link points at a vacant slot")
    }

    #[inline]
    fn node_mut(&mut self, idx: Idx) -> &mut TreeNode<K, Idx> {
        self.storage
            .get_mut(idx)
            .expect("tree link points at a vacant slot")
    }

    #[inline]
    fn release(&mut self, idx: Idx) -> TreeNode<K, Idx> {
        self.storage
            .remove(idx)
            .expect("tree link points at a vacant slot")
    }
}

impl<K, S, Idx> Extend<K> for OrderedTree<K, S, Idx>
where
    K: Ord,
    S: Storage<TreeNode<K, Idx>, Index = Idx>,
    Idx: Index,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K, S, Idx> FromIterator<K> for OrderedTree<K, S, Idx>
where
    K: Ord,
    S: Storage<TreeNode<K, Idx>, Index = Idx> + Default,
    Idx: Index,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K, S, Idx> IntoIterator for &'a OrderedTree<K, S, Idx>
where
    K: Ord,
    S: Storage<TreeNode<K, Idx>, Index = Idx>,
    Idx: Index,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K, S, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// In-order iterator over a tree's keys.
///
/// Keeps the pending left spine on an explicit stack, so deep trees do not
/// recurse.
pub struct Iter<'a, K, S, Idx: Index> {
    storage: &'a S,
    stack: Vec<Idx>,
    remaining: usize,
    _marker: PhantomData<&'a K>,
}

impl<'a, K, S, Idx> Iter<'a, K, S, Idx>
where
    S: Storage<TreeNode<K, Idx>, Index = Idx>,
    Idx: Index + 'a,
{
    fn new(storage: &'a S, root: Idx, len: usize) -> Self {
        let mut iter = Self {
            storage,
            stack: Vec::new(),
            remaining: len,
            _marker: PhantomData,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut idx: Idx) {
        while let Some(node) = self.storage.get(idx) {
            self.stack.push(idx);
            idx = node.left;
        }
    }
}

impl<'a, K, S, Idx> Iterator for Iter<'a, K, S, Idx>
where
    S: Storage<TreeNode<K, Idx>, Index = Idx>,
    Idx: Index + 'a,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.storage.get(idx)?;
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, S, Idx> ExactSizeIterator for Iter<'a, K, S, Idx>
where
    S: Storage<TreeNode<K, Idx>, Index = Idx>,
    Idx: Index + 'a,
{
}
