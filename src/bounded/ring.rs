/// Fixed-length slot store. Not synchronized on its own; every access goes through the
/// queue's lock.
///
/// `count` alone decides full and empty. `head == tail` holds both when the ring is empty
/// and when it is full, so the indices are never compared to each other.
pub(crate) struct Ring<T> {
    buf: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> Ring<T> {
    /// `cap` must be non-zero; the queue checks it before calling.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        debug_assert!(cap > 0);

        let buf = (0..cap).map(|_| None).collect();
        Self {
            buf,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.count
    }

    pub(crate) fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Writes `t` at `tail`, or hands it back if every slot is taken.
    pub(crate) fn try_push(&mut self, t: T) -> Result<(), T> {
        if self.is_full() {
            return Err(t);
        }

        let idx = self.tail;
        self.buffer_write(idx, t);
        self.tail = self.index(idx + 1);
        self.count += 1;
        self.check_invariants();
        Ok(())
    }

    pub(crate) fn try_pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let idx = self.head;
        let item = self.buffer_read(idx);
        self.head = self.index(idx + 1);
        self.count -= 1;
        self.check_invariants();
        Some(item)
    }

    fn index(&self, pos: usize) -> usize {
        pos % self.capacity()
    }

    fn buffer_write(&mut self, idx: usize, value: T) {
        let prev = self.buf[idx].replace(value);
        debug_assert!(prev.is_none(), "overwrote an unread slot at {}", idx);
    }

    fn buffer_read(&mut self, idx: usize) -> T {
        match self.buf[idx].take() {
            Some(item) => item,
            None => unreachable!("slot {} below count is vacant", idx),
        }
    }

    fn check_invariants(&self) {
        debug_assert!(self.count <= self.capacity());
        debug_assert!(self.head < self.capacity() && self.tail < self.capacity());
        debug_assert_eq!(self.tail, self.index(self.head + self.count));
    }
}

#[cfg(test)]
impl<T> Ring<T> {
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    pub(crate) fn tail(&self) -> usize {
        self.tail
    }

    pub(crate) fn occupied(&self) -> Vec<bool> {
        self.buf.iter().map(Option::is_some).collect()
    }
}
