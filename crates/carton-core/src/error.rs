//! Error types for carton-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Invalid size input. Raised by validation before any packing work starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("item '{0}' must be declared with its size as a decimal digit")]
    InvalidSizeFormat(char),

    #[error("item size is {found} but must be between {min} and {max}")]
    SizeOutOfRange {
        found: usize,
        min: usize,
        max: usize,
    },
}
