//! Editing session state behind the browser form.
//!
//! Everything here is plain Rust so it can be exercised without a browser;
//! [`crate::StencilSession`] only converts JS values and forwards.

use std::str::FromStr;
use stencil_codegen::{synthesize_component, PreviewMessage, PreviewOptions, PreviewSink, SynthesizedComponent};
use stencil_core::{
    parse_numeric_input, Dialect, EndpointPatch, FieldKind, FieldPatch, HttpMethod, ModelEditor,
    ModelError, ValidationRules,
};
use thiserror::Error;

/// Errors raised while interpreting form input.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown validation rule: {0:?}")]
    UnknownRule(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A validation rule addressed by the name of its form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleName {
    Required,
    MinLength,
    MaxLength,
    Min,
    Max,
    Pattern,
}

impl FromStr for RuleName {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "required" => Ok(Self::Required),
            "minLength" => Ok(Self::MinLength),
            "maxLength" => Ok(Self::MaxLength),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "pattern" => Ok(Self::Pattern),
            other => Err(SessionError::UnknownRule(other.to_string())),
        }
    }
}

impl RuleName {
    /// Patch setting this rule from raw widget text.
    ///
    /// Numeric rules go through the widget's integer coercion, so text that
    /// does not parse is stored as NaN. `required` is set when the text is
    /// `"true"`.
    pub fn patch_from_text(self, text: &str) -> ValidationRules {
        let mut rules = ValidationRules::default();
        match self {
            Self::Required => rules.required = Some(text == "true"),
            Self::MinLength => rules.min_length = Some(parse_numeric_input(text)),
            Self::MaxLength => rules.max_length = Some(parse_numeric_input(text)),
            Self::Min => rules.min = Some(parse_numeric_input(text)),
            Self::Max => rules.max = Some(parse_numeric_input(text)),
            Self::Pattern => rules.pattern = Some(text.to_string()),
        }
        rules
    }
}

/// State of one editing session: the model plus what the form shows.
#[derive(Debug, Clone, Default)]
pub struct EditingSession {
    pub editor: ModelEditor,
    last_output: Option<SynthesizedComponent>,
    show_preview: bool,
    validation_panel: Option<usize>,
    pub preview_options: PreviewOptions,
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one validation rule of a field from widget text.
    pub fn set_field_rule(&mut self, position: usize, rule: &str, text: &str) -> Result<(), SessionError> {
        let rule: RuleName = rule.parse()?;
        self.editor
            .update_field(position, &FieldPatch::validation(rule.patch_from_text(text)));
        Ok(())
    }

    /// Select the output dialect from its select value.
    pub fn set_dialect(&mut self, dialect: &str) -> Result<(), SessionError> {
        let dialect: Dialect = dialect.parse()?;
        self.editor.set_dialect(dialect);
        Ok(())
    }

    /// Set a field's kind from its select value.
    pub fn set_field_kind(&mut self, position: usize, kind: &str) -> Result<(), SessionError> {
        let kind: FieldKind = kind.parse()?;
        self.editor.update_field(position, &FieldPatch::kind(kind));
        Ok(())
    }

    /// Set an endpoint's method from its select value.
    pub fn set_endpoint_method(&mut self, position: usize, method: &str) -> Result<(), SessionError> {
        let method: HttpMethod = method.parse()?;
        self.editor
            .update_endpoint(position, &EndpointPatch::method(method));
        Ok(())
    }

    /// Synthesize the current model, keep the result, reveal the code view,
    /// and forward the program to `preview` when one is attached.
    pub fn generate(&mut self, preview: Option<&mut dyn PreviewSink>) -> &SynthesizedComponent {
        let component = synthesize_component(self.editor.model());
        if let Some(sink) = preview {
            sink.post(PreviewMessage::from(&component));
        }
        self.show_preview = true;
        self.last_output.insert(component)
    }

    /// Output of the last `generate`, if any.
    pub fn last_output(&self) -> Option<&SynthesizedComponent> {
        self.last_output.as_ref()
    }

    /// Text of the last `generate`, empty before the first one.
    pub fn generated_code(&self) -> &str {
        self.last_output
            .as_ref()
            .map(|c| c.source.as_str())
            .unwrap_or("")
    }

    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    /// Flip code view visibility; returns the new state.
    pub fn toggle_preview(&mut self) -> bool {
        self.show_preview = !self.show_preview;
        self.show_preview
    }

    /// Field whose validation panel is expanded.
    pub fn validation_panel(&self) -> Option<usize> {
        self.validation_panel
    }

    /// Expand the panel of `position`, or collapse it if it is already open.
    pub fn toggle_validation_panel(&mut self, position: usize) -> Option<usize> {
        self.validation_panel = if self.validation_panel == Some(position) {
            None
        } else {
            Some(position)
        };
        self.validation_panel
    }

    /// Remove a field, keeping the open validation panel on the same entry.
    pub fn remove_field(&mut self, position: usize) {
        if position >= self.editor.model().fields.len() {
            return;
        }
        self.editor.remove_field(position);
        self.validation_panel = match self.validation_panel {
            Some(open) if open == position => None,
            Some(open) if open > position => Some(open - 1),
            other => other,
        };
    }
}
