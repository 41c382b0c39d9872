//! Code generators for the supported output dialects.
//!
//! [`component`] holds the dialect-independent assembly (state, fetch
//! functions, validation, effect hook). Each dialect only supplies imports
//! and markup through [`MarkupDialect`].

mod component;
mod mobile;
mod templates;
mod validation;
mod web;

pub use component::{synthesize, synthesize_component};
pub use mobile::MobileWidgetTemplates;
pub use templates::TemplateEngine;
pub use web::WebMarkupTemplates;

use stencil_core::{Dialect, EndpointSpec, FieldSpec};

/// Markup vocabulary of one output dialect.
///
/// Implementations push fully indented lines. The render tree is opened at
/// four spaces of indentation, inside `return (`.
pub trait MarkupDialect {
    /// Dialect these templates render.
    fn dialect(&self) -> Dialect;

    /// Import lines at the top of the program.
    fn imports(&self) -> &'static [&'static str];

    /// Outer container, title, and the opening of the input group.
    fn open_tree(&self, component: &str, lines: &mut Vec<String>);

    /// Input-binding block for one field.
    fn input_block(&self, field: &FieldSpec, lines: &mut Vec<String>);

    /// Submit control running `handler`, then the close of the input group.
    fn submit_action(&self, handler: &[&str], lines: &mut Vec<String>);

    /// Loading / error / data display for one endpoint.
    fn output_block(&self, endpoint: &EndpointSpec, lines: &mut Vec<String>);

    /// Close the outer container.
    fn close_tree(&self, lines: &mut Vec<String>);
}

/// Templates for a dialect.
pub fn templates_for(dialect: Dialect) -> &'static dyn MarkupDialect {
    match dialect {
        Dialect::WebMarkup => &WebMarkupTemplates,
        Dialect::MobileWidget => &MobileWidgetTemplates,
    }
}

/// Output of one synthesis run, tagged for the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedComponent {
    /// Generated program text.
    pub source: String,
    /// Dialect the text was generated for.
    pub dialect: Dialect,
}

impl SynthesizedComponent {
    /// Language name for syntax highlighting; both dialects are TSX-compatible.
    pub fn highlight_language(&self) -> &'static str {
        "typescript"
    }
}

/// Setter identifier for a state variable: `set` plus the name with its
/// first character upper-cased. The rest of the name is kept as is.
pub(crate) fn setter_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("set{}{}", first.to_uppercase(), chars.as_str()),
        None => "set".to_string(),
    }
}

/// Format a number the way the generated program would print it.
pub(crate) fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        // exponent form with an explicit sign, `1e+21`
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}

/// Indent every line of `lines` by `spaces`.
pub(crate) fn push_indented(lines: &mut Vec<String>, block: &[&str], spaces: usize) {
    let indent = " ".repeat(spaces);
    lines.extend(block.iter().map(|line| format!("{}{}", indent, line)));
}
