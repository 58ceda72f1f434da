//! Errors from parsing attribute values the tree itself interprets.
//!
//! The cascade never fails; only the `viewBox` and length parsers used by
//! viewport resolution report problems, and the resolver downgrades those
//! to warnings.

use thiserror::Error;

/// Result alias for attribute parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Why an attribute value could not be parsed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The value was empty or only whitespace.
    #[error("empty value")]
    Empty,

    /// A component was not a number.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// The suffix after a number is not a length unit.
    #[error("unknown length unit '{0}'")]
    UnknownUnit(String),

    /// A `viewBox` did not have exactly four components.
    #[error("viewBox needs 4 numbers, found {0}")]
    ViewBoxArity(usize),

    /// A `viewBox` with a negative extent.
    #[error("viewBox has negative size {width}x{height}")]
    NegativeViewBox {
        /// Declared width.
        width: f32,
        /// Declared height.
        height: f32,
    },
}
