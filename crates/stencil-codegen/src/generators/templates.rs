//! Template engine for documents that are not component source.
//!
//! Component synthesis assembles lines directly. Handlebars is used for
//! the HTML pages handed to collaborators, where escaping matters.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine using Handlebars in strict mode, so a missing
/// variable is an error rather than an empty string.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Whether a template is registered under `name`.
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if !self.has_template(name) {
            return Err(CodegenError::TemplateNotFound(name.to_string()));
        }
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::TemplateError)
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}
