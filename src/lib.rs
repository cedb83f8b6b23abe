//! This crate provides a doubly-linked list with owned nodes, together
//! with stack and queue adapters built on the same node representation.
//!
//! The [`List`] allows inserting and removing elements at both ends in
//! constant time. Accessing, inserting or removing elements at any other
//! position takes *O*(*n*) time. Fallible operations return a [`Result`]
//! and leave the container unchanged on failure.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use listkit::List;
//!
//! let mut list = List::from([1, 2, 3, 4, 5]);
//!
//! assert_eq!(list.remove(2), Ok(3));
//! assert_eq!(list.to_vec(), vec![1, 2, 4, 5]);
//!
//! list.insert_at(2, 99).unwrap();
//! assert_eq!(list.to_vec(), vec![1, 2, 99, 4, 5]);
//!
//! list.sort();
//! assert_eq!(list.to_vec(), vec![1, 2, 4, 5, 99]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!     ╔═══════════╗           ╔═══════════╗           ╔═══════════╗
//!     ║   next    ║ ────────→ ║   next    ║ ── ┄┄ ──→ ║   next    ║ ──→ ∅
//!     ╟───────────╢           ╟───────────╢           ╟───────────╢
//! ∅ ← ║   prev    ║ ←──────── ║   prev    ║ ←── ┄┄ ── ║   prev    ║
//!     ╟───────────╢           ╟───────────╢           ╟───────────╢
//!     ║ payload T ║           ║ payload T ║           ║ payload T ║
//!     ╚═══════════╝           ╚═══════════╝           ╚═══════════╝
//!         ↑ Node 0                Node 1                  Node N-1 ↑
//!         │                                                        │
//!     ╔═══╧═══╤════════╤════╗                                      │
//!     ║ head  │ tail ──┼────╫──────────────────────────────────────┘
//!     ╟───────┴────────┴────╢
//!     ║         len         ║
//!     ╚═════════════════════╝
//!               List
//! ```
//!
//! Each node is allocated on the heap and contains:
//! - the `next` link that *owns* the next node (or nothing if it is the
//!   last element of the list);
//! - the `prev` back-reference that points at the previous node (or
//!   nothing if it is the first element). It is a lookup-only pointer
//!   and is never used to free memory;
//! - the actual payload `T`.
//!
//! The `List` itself holds the owning `head` link, the lookup-only
//! `tail` reference and a length counter, so both ends are reachable in
//! constant time and `len` never walks the chain.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`], [`IterMut`] and
//! [`IntoIter`] iterators. They walk the list front to back, are fused
//! and exact-size, and every fresh call to [`List::iter`] restarts at
//! the head. [`IterMut`] provides mutability of the elements (but not of
//! the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use listkit::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Adapters
//!
//! [`Stack`] (last-in first-out) and [`Queue`] (first-in first-out)
//! reuse the list's node type with their own storage:
//!
//! ```
//! use listkit::{Queue, Stack};
//!
//! let mut stack = Stack::new();
//! stack.extend([10, 20, 30]);
//! assert_eq!(stack.pop(), Ok(30));
//!
//! let mut queue = Queue::new();
//! queue.extend([100, 200, 300]);
//! assert_eq!(queue.pop(), Ok(100));
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`IntoIter`]: crate::IntoIter
//! [`Stack`]: crate::Stack
//! [`Queue`]: crate::Queue
//! [`Result`]: crate::Result

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;

pub mod error;
pub mod list;
pub mod queue;
pub mod stack;
