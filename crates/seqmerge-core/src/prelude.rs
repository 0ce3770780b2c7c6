//! Convenient re-exports for downstream crates.

pub use crate::config::MergeConfig;
pub use crate::error::{Error, Result};
pub use crate::sequence::{BoxedSequence, SeqIter, Sequence};
pub use crate::sources::{from_iter, FromIter, Repeat};
