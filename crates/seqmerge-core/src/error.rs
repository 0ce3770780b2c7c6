use thiserror::Error;

/// Canonical result for the toolkit.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Popping or peeking a cursor that has no further values. This is a
    /// caller contract violation: check `is_empty` first.
    #[error("sequence exhausted")]
    Exhausted,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
