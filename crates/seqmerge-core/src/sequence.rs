//! The pull-based lazy sequence abstraction.
//!
//! A `Sequence` is a one-directional, possibly endless producer of values.
//! Pulling the next value is the only way to advance it; no length is known
//! in advance. The trait exists so the cursor and merge layers can compose
//! over heterogeneous producers without committing to `std::iter::Iterator`,
//! whose contract has no non-consuming exhaustion probe.

/// A forward-only, possibly infinite producer of values.
pub trait Sequence {
    /// The type of value this sequence produces.
    type Item;

    /// Non-consuming exhaustion probe.
    ///
    /// Must be idempotent and must never advance the apparent sequence: a
    /// pair of probes with no intervening `next` observes the same state,
    /// and the value `next` would return is unaffected. Implementations may
    /// memoize one looked-ahead element internally to answer.
    fn has_next(&mut self) -> bool;

    /// Pulls the next value, or `None` once the sequence is exhausted.
    ///
    /// After `None` is returned, every later call also returns `None`.
    fn next(&mut self) -> Option<Self::Item>;

    /// Bridges this sequence into standard iteration.
    fn into_iter(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter { seq: self }
    }

    /// Drains a finite sequence into a vector.
    ///
    /// Never returns if the sequence is infinite.
    fn collect_vec(mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        while let Some(item) = self.next() {
            out.push(item);
        }
        out
    }
}

/// Permits sequence collections to be heterogeneous with respect to the
/// concrete producer type.
pub type BoxedSequence<T> = Box<dyn Sequence<Item = T> + Send>;

impl<T> Sequence for Box<dyn Sequence<Item = T> + Send> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Option<T> {
        (**self).next()
    }
}

/// Adapter returned by [`Sequence::into_iter`].
pub struct SeqIter<S> {
    seq: S,
}

impl<S: Sequence> Iterator for SeqIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.seq.next()
    }
}
