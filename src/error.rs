use std::fmt;
use thiserror::Error;

/// Returned by [`BoundedRingQueue::new`](crate::BoundedRingQueue::new) when asked for zero slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("queue capacity must be at least 1, got {requested}")]
pub struct InvalidCapacity {
    pub requested: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EnqueueErrorKind {
    #[error("enqueue failed because queue is full")]
    Full,
    #[error("enqueue failed because no slot freed up before the deadline")]
    Timeout,
}

impl EnqueueErrorKind {
    pub fn is_full(&self) -> bool {
        matches!(self, EnqueueErrorKind::Full)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, EnqueueErrorKind::Timeout)
    }
}

/// A rejected enqueue. The queue was left untouched and the value is handed back.
#[derive(Clone, PartialEq, Eq)]
pub struct EnqueueError<T> {
    pub(crate) kind: EnqueueErrorKind,
    pub(crate) val: T,
}

impl<T> fmt::Debug for EnqueueError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnqueueError")
            .field("kind", &self.kind)
            .finish()
    }
}

impl<T> fmt::Display for EnqueueError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl<T> std::error::Error for EnqueueError<T> {}

impl<T> EnqueueError<T> {
    pub fn kind(&self) -> EnqueueErrorKind {
        self.kind
    }

    pub fn is_full(&self) -> bool {
        self.kind.is_full()
    }

    pub fn is_timeout(&self) -> bool {
        self.kind.is_timeout()
    }

    pub fn into_inner(self) -> T {
        self.val
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DequeueError {
    #[error("dequeue failed because queue is empty")]
    Empty,
    #[error("dequeue failed because no item arrived before the deadline")]
    Timeout,
}

impl DequeueError {
    pub fn is_empty(&self) -> bool {
        matches!(self, DequeueError::Empty)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DequeueError::Timeout)
    }
}
