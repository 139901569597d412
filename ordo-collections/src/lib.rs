//! Classic ordered containers and the algorithms that maintain them.
//!
//! Two self-maintaining containers form the core:
//!
//! | Structure | Invariant | Key Operations |
//! |-----------|-----------|----------------|
//! | [`PriorityQueue`] | every element `>=` its parent | O(log n) insert / delete_min, O(1) find_min |
//! | [`OrderedTree`] | left subtree `<` node `<` right subtree | O(height) contains / insert / remove |
//!
//! alongside three plain sequential containers:
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`SeqList`] | positional list | O(position) insert / remove / get |
//! | [`BoundedQueue`] | fixed-capacity FIFO | O(1) push / pop |
//! | [`BoundedStack`] | fixed-capacity LIFO | O(1) push / pop / peek |
//!
//! # Node storage
//!
//! Node-based structures do not allocate nodes individually. Each owns a
//! [`Storage`] (by default an [`Arena`]) and links nodes by index:
//!
//! ```text
//! Storage (Arena)      - owns nodes, hands out stable indices
//! OrderedTree/SeqList  - hold a root/head index, nodes hold child/next indices
//! ```
//!
//! A link is an integer with a reserved [`Index::NONE`] sentinel, so a splice
//! rewrites indices and a released node cannot be reached through a stale
//! link. Releasing a node returns its slot to the arena for reuse.
//!
//! # Quick Start
//!
//! ```
//! use ordo_collections::{OrderedTree, PriorityQueue};
//!
//! let mut pq: PriorityQueue = PriorityQueue::with_capacity(8);
//! let mut tree: OrderedTree = OrderedTree::new();
//!
//! for key in [5, 3, 8, 1, 4] {
//!     pq.insert(key).unwrap();
//!     tree.insert(key);
//! }
//!
//! assert_eq!(pq.delete_min(), Ok(1));
//! assert!(tree.remove(&1));
//! assert_eq!(tree.first(), Some(pq.find_min().unwrap()));
//! ```
//!
//! # Errors
//!
//! Capacity and emptiness violations are reported through [`Error`] and never
//! mutate the container. Lookups that can legitimately miss return `bool` or
//! `Option`: removing an absent key from a tree returns `false`, inserting a
//! duplicate returns `false` and changes nothing.
//!
//! # Logging
//!
//! Events are emitted through the `log` facade: `debug` for bulk builds and
//! capacity rejections, `trace` for structural splices. No logger is
//! installed by this crate.
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod error;
pub mod heap;
pub mod index;
pub mod list;
pub mod queue;
pub mod stack;
pub mod storage;
pub mod tree;

pub use error::{Error, Result};
pub use heap::PriorityQueue;
pub use index::Index;
pub use list::{ListNode, SeqList};
pub use queue::BoundedQueue;
pub use stack::BoundedStack;
pub use storage::{Arena, Storage};
pub use tree::{OrderedTree, TreeNode};

#[cfg(feature = "slab")]
pub use list::SlabListStorage;
#[cfg(feature = "slab")]
pub use tree::SlabTreeStorage;
