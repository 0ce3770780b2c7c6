#![forbid(unsafe_code)]
//! seqmerge-ops: the k-way merge engine, predicate-bounded sequences, and
//! the public sequence constructors.
//!
//! Design intent:
//! - Everything here is pull-based and synchronous; nothing suspends.
//! - The only parallelism is the optional winner reduction in `merge`
//!   (feature `parallel`), which fans out over disjoint cursors.

pub mod bounded;
pub mod merge;
pub mod sequences;

pub use bounded::BoundedWhile;
pub use merge::KWayMerge;
pub use sequences::{constant, merge_sorted, take_while};
