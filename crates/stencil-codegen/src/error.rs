//! Error types for code generation.
//!
//! Synthesis itself is infallible; these errors come from the template
//! engine that renders the preview host page.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur outside of synthesis proper.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Template not found.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
