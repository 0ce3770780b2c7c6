#![forbid(unsafe_code)]
//! seqmerge-cursor: look-ahead buffering over forward-only sequences.
//!
//! This crate provides the buffered peeking layer the merge engine sits on.
//! Mutual exclusion of pop/peek on a single cursor is enforced by exclusive
//! `&mut` borrows rather than a lock: one borrow is one critical section,
//! and distinct cursors are independent borrows that may be driven
//! concurrently.

pub mod cursor;

pub use cursor::Cursor;
