//! Error types for the Stencil core.

use thiserror::Error;

/// Errors raised while interpreting values handed over by a form control.
///
/// Editor operations never fail; this type only covers the string
/// conversions a binding layer performs before calling them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Unknown field kind: {0:?} (expected string, number or boolean)")]
    UnknownFieldKind(String),

    #[error("Unknown HTTP method: {0:?} (expected GET, POST, PUT or DELETE)")]
    UnknownMethod(String),

    #[error("Unknown dialect: {0:?} (expected web or mobile)")]
    UnknownDialect(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, ModelError>;
