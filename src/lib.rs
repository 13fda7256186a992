//! A double-ended queue of strings built on a circular, doubly-linked
//! ring with a sentinel node. Elements can be inserted and removed at
//! either end in constant time, and the whole queue can be sorted,
//! reversed, pair-swapped or de-duplicated in place.
//!
//! Internally, the queue uses a `Vec` of slots and links elements by
//! index. The sentinel lives in the queue itself and is addressed by a
//! reserved index, so an empty queue is just a sentinel pointing at
//! itself.
//!
//! As items are removed from the queue, their slots are put on an
//! internal free list. This free list is used when items are inserted
//! into the queue before the internal `Vec` is expanded.
//!
//! Removing an element does not release it. It comes back as an
//! [`Element`], which the caller can link back in or release.
//!
//! ```
//! use ring_queue::Queue;
//!
//! let mut q = Queue::new();
//! q.insert_tail("b").unwrap();
//! q.insert_tail("a").unwrap();
//! q.insert_head("c").unwrap();
//!
//! q.sort();
//! assert_eq!(vec!["a", "b", "c"], q.iter_front().collect::<Vec<_>>());
//!
//! let e = q.remove_tail().unwrap();
//! assert_eq!("c", e.value());
//! e.release();
//! ```

mod algorithms;
mod config;
mod element;
mod error;
mod iterators;
mod link;
mod queue;
mod slot;
mod sort;
mod token;

pub use crate::config::QueueConfig;
pub use crate::element::{release, Element};
pub use crate::error::{QueueError, Result};
pub use crate::iterators::{DrainBack, DrainFront, IterBack, IterFront};
pub use crate::queue::Queue;
pub use crate::token::Token;
