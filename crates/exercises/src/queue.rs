//! FIFO queues: one built from two stacks, one over a fixed ring buffer.

use tracing::trace;

use crate::error::ExerciseError;

/// Queue over an inbox and an outbox stack.
///
/// The outbox is refilled from the inbox only when it runs dry, so every
/// element moves at most twice and each operation is amortised O(1).
#[derive(Debug, Clone)]
pub struct TwoStackQueue<T> {
    inbox: Vec<T>,
    outbox: Vec<T>,
}

impl<T> Default for TwoStackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TwoStackQueue<T> {
    pub fn new() -> Self {
        Self {
            inbox: Vec::new(),
            outbox: Vec::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.inbox.push(value);
    }

    pub fn dequeue(&mut self) -> Result<T, ExerciseError> {
        self.refill();
        self.outbox.pop().ok_or(ExerciseError::Empty)
    }

    pub fn peek(&mut self) -> Result<&T, ExerciseError> {
        self.refill();
        self.outbox.last().ok_or(ExerciseError::Empty)
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    fn refill(&mut self) {
        if self.outbox.is_empty() && !self.inbox.is_empty() {
            trace!(moved = self.inbox.len(), "refill outbox");
            self.outbox.extend(self.inbox.drain(..).rev());
        }
    }
}

/// Fixed-capacity ring buffer.
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    pub fn new(capacity: usize) -> Result<Self, ExerciseError> {
        if capacity == 0 {
            return Err(ExerciseError::InvalidArgument("capacity must be positive"));
        }
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Ok(Self { buf, head: 0, len: 0 })
    }

    pub fn enqueue(&mut self, value: T) -> Result<(), ExerciseError> {
        if self.is_full() {
            return Err(ExerciseError::CapacityExceeded);
        }
        let tail = (self.head + self.len) % self.buf.len();
        self.buf[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, ExerciseError> {
        if self.len == 0 {
            return Err(ExerciseError::Empty);
        }
        let value = self.buf[self.head].take().ok_or(ExerciseError::Empty)?;
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        Ok(value)
    }

    pub fn front(&self) -> Result<&T, ExerciseError> {
        if self.len == 0 {
            return Err(ExerciseError::Empty);
        }
        self.buf[self.head].as_ref().ok_or(ExerciseError::Empty)
    }

    pub fn rear(&self) -> Result<&T, ExerciseError> {
        if self.len == 0 {
            return Err(ExerciseError::Empty);
        }
        let last = (self.head + self.len - 1) % self.buf.len();
        self.buf[last].as_ref().ok_or(ExerciseError::Empty)
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }
}
