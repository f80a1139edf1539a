//! A bounded, fixed-capacity FIFO queue for many producer and many consumer threads.
//!
//! [`BoundedRingQueue`] stores at most `capacity` items in a ring of exactly that many slots,
//! guarded by a single lock and two condition variables. Each side comes in three flavours:
//! blocking (`enqueue` / `dequeue`), non-blocking (`try_enqueue` / `try_dequeue`) and
//! deadline-bounded (`enqueue_timeout` / `dequeue_timeout`).
//!
//! ```
//! use ring_queue::BoundedRingQueue;
//!
//! let queue = BoundedRingQueue::new(2).unwrap();
//! queue.try_enqueue("a").unwrap();
//! queue.try_enqueue("b").unwrap();
//! assert!(queue.try_enqueue("c").unwrap_err().is_full());
//!
//! assert_eq!(queue.dequeue(), "a");
//! assert_eq!(queue.try_dequeue(), Ok("b"));
//! ```

mod bounded;
pub mod error;
mod loom;

pub use crate::bounded::BoundedRingQueue;
pub use crate::error::{DequeueError, EnqueueError, EnqueueErrorKind, InvalidCapacity};
