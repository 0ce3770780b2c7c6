//! Predicate-bounded pass-through of a lazy sequence.

use seqmerge_core::sequence::Sequence;

/// Emits the prefix of the backing sequence up to, and excluding, the first
/// element the predicate rejects.
///
/// The first rejection closes the gate permanently: the rejecting element
/// is discarded (it cannot be recovered), and every later pull reports
/// exhaustion without touching the backing sequence again, even when later
/// elements would have passed.
pub struct BoundedWhile<S: Sequence, P> {
    source: S,
    keep_while: P,
    // One-element look-ahead so the exhaustion probe stays non-consuming;
    // only ever holds a value that already passed the predicate.
    pending: Option<S::Item>,
    closed: bool,
}

impl<S, P> BoundedWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    pub fn new(source: S, keep_while: P) -> Self {
        Self {
            source,
            keep_while,
            pending: None,
            closed: false,
        }
    }

    /// Pull one element from the backing sequence and classify it.
    fn pull(&mut self) -> Option<S::Item> {
        match self.source.next() {
            Some(item) => {
                if (self.keep_while)(&item) {
                    Some(item)
                } else {
                    self.closed = true;
                    #[cfg(feature = "tracing")]
                    tracing::trace!("predicate rejected; sequence closed");
                    None
                }
            }
            None => None,
        }
    }
}

impl<S, P> Sequence for BoundedWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        if self.closed {
            return false;
        }
        if self.pending.is_some() {
            return true;
        }
        self.pending = self.pull();
        self.pending.is_some()
    }

    fn next(&mut self) -> Option<S::Item> {
        if self.closed {
            return None;
        }
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        self.pull()
    }
}
