//! Peekable cursor over a lazy sequence.
//!
//! A cursor blends a LIFO push-back buffer with an exclusively-owned
//! backing sequence. Pop and peek consult the buffer first, so values can
//! be examined, handed back, and re-examined without disturbing the backing
//! producer. The apparent sequence is always the buffer contents in
//! last-pushed-first-popped order followed by the untouched backing
//! sequence.

use seqmerge_core::error::{Error, Result};
use seqmerge_core::sequence::Sequence;

const DEFAULT_CAPACITY: usize = 8;

/// Look-ahead wrapper over a lazy sequence.
pub struct Cursor<S: Sequence> {
    source: S,
    buffer: Vec<S::Item>,
}

impl<S: Sequence> Cursor<S> {
    /// Wraps a backing sequence with an empty push-back buffer.
    pub fn new(source: S) -> Self {
        Self::with_capacity(source, DEFAULT_CAPACITY)
    }

    /// Wraps a backing sequence, reserving `capacity` push-back slots.
    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self {
            source,
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Seeds the cursor with an existing buffer whose contents take
    /// precedence over the backing sequence. The vector's last element is
    /// the top: it pops first.
    pub fn with_buffer(buffer: Vec<S::Item>, source: S) -> Self {
        Self { source, buffer }
    }

    /// Pushes a value back onto the cursor; it becomes the next value
    /// popped or peeked. Always succeeds.
    pub fn push(&mut self, item: S::Item) {
        self.buffer.push(item);
        #[cfg(feature = "tracing")]
        tracing::trace!(depth = self.buffer.len(), "pushed back");
    }

    /// Pops the buffer top, or the next backing value when the buffer is
    /// empty.
    ///
    /// Popping an exhausted cursor is a caller contract violation and
    /// returns [`Error::Exhausted`]; check [`Cursor::is_empty`] first.
    pub fn pop(&mut self) -> Result<S::Item> {
        match self.buffer.pop() {
            Some(item) => Ok(item),
            None => self.source.next().ok_or(Error::Exhausted),
        }
    }

    /// Looks at the next value without consuming it.
    ///
    /// When the buffer is empty this transfers exactly one value from the
    /// backing sequence into the buffer, so repeated peeks observe the same
    /// value. Peeking an exhausted cursor returns [`Error::Exhausted`].
    pub fn peek(&mut self) -> Result<&S::Item> {
        self.peek_opt().ok_or(Error::Exhausted)
    }

    /// Like [`Cursor::peek`], reporting exhaustion as `None`.
    pub fn peek_opt(&mut self) -> Option<&S::Item> {
        if self.buffer.is_empty() {
            let item = self.source.next()?;
            #[cfg(feature = "tracing")]
            tracing::trace!("buffered one value from the backing sequence");
            self.buffer.push(item);
        }
        self.buffer.last()
    }

    /// True iff both the buffer and the backing sequence have no further
    /// values. Once true, stays true: cursors never refill.
    pub fn is_empty(&mut self) -> bool {
        self.buffer.is_empty() && !self.source.has_next()
    }
}
