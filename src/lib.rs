#![forbid(unsafe_code)]
//! seqmerge: lazy sequences, peekable cursors, and an incremental k-way
//! merge driven by a caller-supplied comparator.
//!
//! The toolkit is pull-based throughout: a [`Sequence`] produces values one
//! at a time on demand and may be infinite. [`Cursor`] adds look-ahead and
//! push-back over any sequence, and [`KWayMerge`] blends several
//! individually-sorted sequences into one sorted sequence, consuming one
//! value per pull.
//!
//! # Quick start
//!
//! ```
//! use seqmerge::{from_iter, merge_sorted, Sequence};
//!
//! let odds = from_iter(vec![1, 3, 5]);
//! let evens = from_iter(vec![2, 4, 6]);
//! let merged = merge_sorted(vec![odds, evens], |a, b| a.cmp(b)).unwrap();
//! assert_eq!(merged.collect_vec(), vec![1, 2, 3, 4, 5, 6]);
//! ```

pub use seqmerge_core::config::MergeConfig;
pub use seqmerge_core::error::{Error, Result};
pub use seqmerge_core::sequence::{BoxedSequence, SeqIter, Sequence};
pub use seqmerge_core::sources::{from_iter, FromIter, Repeat};
pub use seqmerge_cursor::Cursor;
pub use seqmerge_ops::{constant, merge_sorted, take_while, BoundedWhile, KWayMerge};

/// Convenient re-exports for callers that want the whole surface at once.
pub mod prelude {
    pub use seqmerge_core::prelude::*;
    pub use seqmerge_cursor::Cursor;
    pub use seqmerge_ops::{constant, merge_sorted, take_while, BoundedWhile, KWayMerge};
}
