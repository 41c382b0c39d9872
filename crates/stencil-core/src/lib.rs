//! Core types and editing operations for the Stencil component generator.
//!
//! This crate provides the pieces every other stencil crate builds on:
//! - The declarative component model (fields, endpoints, output dialect)
//! - The model editor with its position-addressed mutation operations
//! - Patch types used to merge partial updates into fields and endpoints
//! - Error types for parsing enum values coming from form controls

pub mod editor;
pub mod errors;
pub mod model;

pub use editor::*;
pub use errors::*;
pub use model::*;
