//! Boilerplate synthesis from Stencil component models.
//!
//! This crate turns a [`ComponentModel`](stencil_core::ComponentModel) into
//! the source text of a React function component: state hooks for every
//! field, loading/error/data state and a fetch function for every endpoint,
//! a validation routine, and a render tree in either the web markup or the
//! mobile widget dialect.
//!
//! Synthesis is a pure function. It never fails and never inspects the
//! names it is given, so malformed input produces malformed output.
//!
//! # Example
//!
//! ```
//! use stencil_core::{ComponentModel, FieldKind, FieldSpec};
//! use stencil_codegen::synthesize;
//!
//! let mut model = ComponentModel::new("Counter");
//! model.fields.push(FieldSpec::new("count", FieldKind::Number));
//!
//! let code = synthesize(&model);
//! assert!(code.contains("const [count, setCount] = useState(0);"));
//! ```
//!
//! The [`preview`] module holds the one-way boundary to a sandboxed live
//! preview, including the host page the sandbox loads.

pub mod error;
pub mod generators;
pub mod preview;

pub use error::{CodegenError, Result};
pub use generators::{
    synthesize, synthesize_component, templates_for, MarkupDialect, MobileWidgetTemplates,
    SynthesizedComponent, TemplateEngine, WebMarkupTemplates,
};
pub use preview::{
    render_host_document, PreviewMessage, PreviewOptions, PreviewSink, RecordingSink,
};
