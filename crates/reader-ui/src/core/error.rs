//! Error types for option resolution.
//!
//! # Design
//! - Constant messages; the offending input travels in structured fields.
//! - Only DOM-sourced strings can fail; typed updates never do.

use thiserror::Error;

use crate::core::article::ArticleField;

/// Result alias for option lookups.
pub type OptionResult<T> = Result<T, OptionError>;

/// Errors raised while mapping raw control values onto option catalogs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// A control emitted a value that is not part of its bound catalog.
    #[error("unknown option value")]
    UnknownValue {
        /// Field whose catalog was searched.
        field: ArticleField,
        /// Raw value received from the control.
        value: String,
    },
}
