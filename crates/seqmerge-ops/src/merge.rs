//! Incremental k-way merge of sorted lazy sequences.
//!
//! Each pull finds the cursor whose peeked value compares least under the
//! caller-supplied comparator and consumes exactly one value from it.
//! Inputs must be individually sorted ascending under that comparator; an
//! unsorted input never faults, but the output ordering guarantee lapses
//! for its contribution.

use std::cmp::Ordering;

use seqmerge_core::config::MergeConfig;
use seqmerge_core::error::{Error, Result};
use seqmerge_core::sequence::Sequence;
use seqmerge_cursor::Cursor;

/// Merges a fixed set of individually-sorted sequences into one sorted
/// sequence, lazily.
///
/// When several inputs peek equal minima, the lowest input index wins the
/// tie, so the emission order is deterministic whether the winner reduction
/// runs as a linear scan or fans out across workers.
pub struct KWayMerge<S: Sequence, F> {
    cursors: Vec<Cursor<S>>,
    cmp: F,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel_threshold: usize,
}

impl<S, F> KWayMerge<S, F>
where
    S: Sequence,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    /// Wraps each input sequence in its own cursor.
    ///
    /// The input collection must be non-empty.
    pub fn new(sources: Vec<S>, cmp: F) -> Result<Self> {
        Self::with_config(sources, cmp, &MergeConfig::default())
    }

    /// Like [`KWayMerge::new`], with explicit tunables.
    pub fn with_config(sources: Vec<S>, cmp: F, config: &MergeConfig) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::InvalidInput(
                "merge requires at least one input sequence".into(),
            ));
        }
        let cursors = sources
            .into_iter()
            .map(|s| Cursor::with_capacity(s, config.buffer_capacity))
            .collect();
        Ok(Self {
            cursors,
            cmp,
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// Number of input sequences being merged.
    pub fn width(&self) -> usize {
        self.cursors.len()
    }

    fn any_remaining(&mut self) -> bool {
        self.cursors.iter_mut().any(|c| !c.is_empty())
    }

    fn advance_sequential(&mut self) -> Option<S::Item> {
        let cmp = &self.cmp;
        let winner = self
            .cursors
            .iter_mut()
            .enumerate()
            .reduce(|a, b| lesser_top(a, b, cmp));
        emit(winner)
    }
}

#[cfg(feature = "parallel")]
impl<S, F> KWayMerge<S, F>
where
    S: Sequence + Send,
    S::Item: Send,
    F: Fn(&S::Item, &S::Item) -> Ordering + Sync,
{
    fn advance_parallel(&mut self) -> Option<S::Item> {
        use rayon::prelude::*;

        let cmp = &self.cmp;
        let winner = self
            .cursors
            .par_iter_mut()
            .enumerate()
            .reduce_with(|a, b| lesser_top(a, b, cmp));
        emit(winner)
    }
}

/// Pairwise rule for the winner reduction: an empty operand loses outright;
/// otherwise the lesser peek wins and ties go to the lower input index.
/// Associative and commutative, so any reduction order picks the same
/// cursor.
fn lesser_top<'a, S, F>(
    a: (usize, &'a mut Cursor<S>),
    b: (usize, &'a mut Cursor<S>),
    cmp: &F,
) -> (usize, &'a mut Cursor<S>)
where
    S: Sequence,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    let (ia, ca) = a;
    let (ib, cb) = b;
    let b_wins = match (ca.peek_opt(), cb.peek_opt()) {
        (None, _) => true,
        (_, None) => false,
        (Some(x), Some(y)) => match cmp(x, y) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => ib < ia,
        },
    };
    if b_wins {
        (ib, cb)
    } else {
        (ia, ca)
    }
}

/// Consume one value from the winning cursor. A winner that cannot pop
/// means every input was empty: the merge is exhausted for good.
fn emit<S: Sequence>(winner: Option<(usize, &mut Cursor<S>)>) -> Option<S::Item> {
    let (_, cursor) = winner?;
    match cursor.pop() {
        Ok(item) => Some(item),
        Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("all inputs exhausted");
            None
        }
    }
}

#[cfg(not(feature = "parallel"))]
impl<S, F> Sequence for KWayMerge<S, F>
where
    S: Sequence,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        self.any_remaining()
    }

    fn next(&mut self) -> Option<S::Item> {
        self.advance_sequential()
    }
}

#[cfg(feature = "parallel")]
impl<S, F> Sequence for KWayMerge<S, F>
where
    S: Sequence + Send,
    S::Item: Send,
    F: Fn(&S::Item, &S::Item) -> Ordering + Sync,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        self.any_remaining()
    }

    fn next(&mut self) -> Option<S::Item> {
        if self.cursors.len() >= self.parallel_threshold {
            self.advance_parallel()
        } else {
            self.advance_sequential()
        }
    }
}
