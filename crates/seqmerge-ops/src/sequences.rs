//! Public sequence constructors.
//!
//! These assemble the toolkit's sequences from caller inputs and do no
//! algorithmic work beyond construction and input validation.

use std::cmp::Ordering;

use seqmerge_core::error::Result;
use seqmerge_core::sequence::Sequence;
use seqmerge_core::sources::Repeat;

use crate::bounded::BoundedWhile;
use crate::merge::KWayMerge;

/// An endless sequence repeating `value`.
///
/// Restartable: each call builds an independent sequence.
pub fn constant<T: Clone>(value: T) -> Repeat<T> {
    Repeat::new(value)
}

/// Passes `source` through while `keep_while` holds; the first rejected
/// element terminates the sequence permanently.
pub fn take_while<S, P>(source: S, keep_while: P) -> BoundedWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    BoundedWhile::new(source, keep_while)
}

/// Merges individually-sorted sequences into one sorted sequence under
/// `cmp`. Fails fast when `sources` is empty.
pub fn merge_sorted<S, F>(sources: Vec<S>, cmp: F) -> Result<KWayMerge<S, F>>
where
    S: Sequence,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    KWayMerge::new(sources, cmp)
}
