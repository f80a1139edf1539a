mod ring;

use crate::bounded::ring::Ring;
use crate::error::{DequeueError, EnqueueError, EnqueueErrorKind, InvalidCapacity};
use crate::loom::{Condvar, Mutex, MutexGuard};
use std::fmt;
use std::sync::PoisonError;
use std::time::{Duration, Instant};

/// A fixed-capacity FIFO queue shared by any number of producer and consumer threads.
///
/// All state lives behind one lock. Producers that find the queue full wait on
/// `not_full`, consumers that find it empty wait on `not_empty`, and each successful
/// mutation wakes at most one waiter on the opposite side. Every wait loop re-checks
/// its predicate after waking, so spurious wakeups and lost races are harmless.
///
/// Which of several blocked threads wakes first is unspecified.
///
/// The queue is not reference counted; share it between threads with an `Arc`.
pub struct BoundedRingQueue<T> {
    ring: Mutex<Ring<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl<T> BoundedRingQueue<T> {
    /// Creates a queue with exactly `capacity` slots.
    pub fn new(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            tracing::warn!("rejected queue construction with zero capacity");
            return Err(InvalidCapacity {
                requested: capacity,
            });
        }

        tracing::debug!(capacity, "created bounded ring queue");
        Ok(Self {
            ring: Mutex::new(Ring::with_capacity(capacity)),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        })
    }

    /// Appends `item`, blocking while the queue is full.
    pub fn enqueue(&self, item: T) {
        let mut ring = self.lock();
        while ring.is_full() {
            ring = self
                .not_full
                .wait(ring)
                .unwrap_or_else(PoisonError::into_inner);
        }

        self.push_locked(ring, item);
    }

    /// Appends `item` if a slot is free right now.
    pub fn try_enqueue(&self, item: T) -> Result<(), EnqueueError<T>> {
        let ring = self.lock();
        if ring.is_full() {
            return Err(EnqueueError {
                kind: EnqueueErrorKind::Full,
                val: item,
            });
        }

        self.push_locked(ring, item);
        Ok(())
    }

    /// Appends `item`, waiting at most `timeout` for a slot to free up.
    ///
    /// On timeout the queue is left exactly as it was and `item` comes back inside the error.
    pub fn enqueue_timeout(&self, item: T, timeout: Duration) -> Result<(), EnqueueError<T>> {
        let deadline = match Instant::now().checked_add(timeout) {
            Some(deadline) => deadline,
            None => {
                self.enqueue(item);
                return Ok(());
            }
        };

        let mut ring = self.lock();
        while ring.is_full() {
            let now = Instant::now();
            if now >= deadline {
                tracing::trace!(?timeout, "enqueue timed out on a full queue");
                return Err(EnqueueError {
                    kind: EnqueueErrorKind::Timeout,
                    val: item,
                });
            }

            ring = self
                .not_full
                .wait_timeout(ring, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }

        self.push_locked(ring, item);
        Ok(())
    }

    /// Removes the oldest item, blocking while the queue is empty.
    pub fn dequeue(&self) -> T {
        let mut ring = self.lock();
        loop {
            if let Some(item) = ring.try_pop() {
                self.not_full.notify_one();
                return item;
            }

            ring = self
                .not_empty
                .wait(ring)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Removes the oldest item if there is one right now.
    pub fn try_dequeue(&self) -> Result<T, DequeueError> {
        let item = self.lock().try_pop().ok_or(DequeueError::Empty)?;
        self.not_full.notify_one();
        Ok(item)
    }

    /// Removes the oldest item, waiting at most `timeout` for one to arrive.
    pub fn dequeue_timeout(&self, timeout: Duration) -> Result<T, DequeueError> {
        let deadline = match Instant::now().checked_add(timeout) {
            Some(deadline) => deadline,
            None => return Ok(self.dequeue()),
        };

        let mut ring = self.lock();
        loop {
            if let Some(item) = ring.try_pop() {
                self.not_full.notify_one();
                return Ok(item);
            }

            let now = Instant::now();
            if now >= deadline {
                tracing::trace!(?timeout, "dequeue timed out on an empty queue");
                return Err(DequeueError::Timeout);
            }

            ring = self
                .not_empty
                .wait_timeout(ring, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }

    /// Number of stored items at the moment of the call.
    ///
    /// The value may be stale as soon as it is returned. Do not use it to predict whether a
    /// `try_*` call will succeed; call the `try_*` or `*_timeout` method instead.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Snapshot, with the same staleness caveat as [`len`](Self::len).
    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    /// Snapshot, with the same staleness caveat as [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // No critical section can panic, so a poisoned lock still guards a consistent ring.
    fn lock(&self) -> MutexGuard<'_, Ring<T>> {
        self.ring.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push_locked(&self, mut ring: MutexGuard<'_, Ring<T>>, item: T) {
        if ring.try_push(item).is_err() {
            unreachable!("push on a ring checked to have a free slot");
        }
        drop(ring);

        self.not_empty.notify_one();
    }
}

impl<T> fmt::Debug for BoundedRingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedRingQueue")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}
