//! Error types for group and codec operations.

use crate::codec::Kind;
use thiserror::Error;

/// Errors that can occur when working with groups and their encodings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported capability: {0}")]
    Unsupported(&'static str),
    #[error("unexpected end of buffer at value {index}: needed {needed} bytes, {remaining} remaining")]
    EndOfBuffer {
        index: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("invalid {kind} encoding at value {index}")]
    InvalidEncoding { index: usize, kind: Kind },
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("insufficient capacity: needed {needed} bytes, {remaining} remaining")]
    InsufficientCapacity { needed: usize, remaining: usize },
}
