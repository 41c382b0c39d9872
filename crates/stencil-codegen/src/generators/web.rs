//! Web markup templates: `div`, `form`, `input`.

use super::{push_indented, setter_name, MarkupDialect};
use stencil_core::{Dialect, EndpointSpec, FieldKind, FieldSpec};

const IMPORTS: &[&str] = &[
    "import React, { useState, useEffect } from 'react';",
    "import axios from 'axios';",
];

/// Templates for browser components.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMarkupTemplates;

impl WebMarkupTemplates {
    /// `type`, bound attribute, and change handler of the form control.
    fn control(field: &FieldSpec) -> (&'static str, String, String) {
        let name = &field.name;
        let setter = setter_name(name);
        match field.kind {
            FieldKind::String => (
                "text",
                format!("value={{{}}}", name),
                format!("onChange={{(e) => {}(e.target.value)}}", setter),
            ),
            FieldKind::Number => (
                "number",
                format!("value={{{}}}", name),
                format!("onChange={{(e) => {}(Number(e.target.value))}}", setter),
            ),
            FieldKind::Boolean => (
                "checkbox",
                format!("checked={{{}}}", name),
                format!("onChange={{(e) => {}(e.target.checked)}}", setter),
            ),
        }
    }
}

impl MarkupDialect for WebMarkupTemplates {
    fn dialect(&self) -> Dialect {
        Dialect::WebMarkup
    }

    fn imports(&self) -> &'static [&'static str] {
        IMPORTS
    }

    fn open_tree(&self, component: &str, lines: &mut Vec<String>) {
        lines.push("    <div style={{ padding: 16 }}>".to_string());
        lines.push(format!("      <h1>{}</h1>", component));
        lines.push("      <form onSubmit={(e) => e.preventDefault()}>".to_string());
    }

    fn input_block(&self, field: &FieldSpec, lines: &mut Vec<String>) {
        let (input_type, binding, handler) = Self::control(field);
        let marker = if field.is_required() { " *" } else { "" };

        lines.push("        <label style={{ display: 'block', marginBottom: 16 }}>".to_string());
        lines.push(format!("          {}{}", field.name, marker));
        lines.push("          <input".to_string());
        lines.push(format!("            type=\"{}\"", input_type));
        lines.push(format!("            {}", binding));
        lines.push(format!("            {}", handler));
        lines.push("          />".to_string());
        lines.push("        </label>".to_string());
    }

    fn submit_action(&self, handler: &[&str], lines: &mut Vec<String>) {
        lines.push("        <button".to_string());
        lines.push("          type=\"submit\"".to_string());
        lines.push("          onClick={() => {".to_string());
        push_indented(lines, handler, 12);
        lines.push("          }}".to_string());
        lines.push("        >".to_string());
        lines.push("          Submit".to_string());
        lines.push("        </button>".to_string());
        lines.push("      </form>".to_string());
    }

    fn output_block(&self, endpoint: &EndpointSpec, lines: &mut Vec<String>) {
        let name = &endpoint.name;
        lines.push("      <div style={{ marginTop: 16 }}>".to_string());
        lines.push(format!("        <h2>{} Data</h2>", name));
        lines.push(format!("        {{{}Loading && <p>Loading...</p>}}", name));
        lines.push(format!(
            "        {{{}Error && <p style={{{{ color: 'red' }}}}>Error: {{{}Error}}</p>}}",
            name, name
        ));
        lines.push(format!(
            "        {{{}Data && <pre>{{JSON.stringify({}Data, null, 2)}}</pre>}}",
            name, name
        ));
        lines.push("      </div>".to_string());
    }

    fn close_tree(&self, lines: &mut Vec<String>) {
        lines.push("    </div>".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_core::{HttpMethod, ValidationRules};

    #[test]
    fn test_input_controls_by_kind() {
        let mut lines = Vec::new();
        WebMarkupTemplates.input_block(&FieldSpec::new("name", FieldKind::String), &mut lines);
        WebMarkupTemplates.input_block(&FieldSpec::new("age", FieldKind::Number), &mut lines);
        WebMarkupTemplates.input_block(&FieldSpec::new("agree", FieldKind::Boolean), &mut lines);
        let text = lines.join("\n");

        assert!(text.contains("type=\"text\""));
        assert!(text.contains("onChange={(e) => setName(e.target.value)}"));
        assert!(text.contains("type=\"number\""));
        assert!(text.contains("onChange={(e) => setAge(Number(e.target.value))}"));
        assert!(text.contains("type=\"checkbox\""));
        assert!(text.contains("checked={agree}"));
        assert!(text.contains("onChange={(e) => setAgree(e.target.checked)}"));
    }

    #[test]
    fn test_required_marker() {
        let field = FieldSpec::new("email", FieldKind::String).with_validation(ValidationRules {
            required: Some(true),
            ..Default::default()
        });
        let mut lines = Vec::new();
        WebMarkupTemplates.input_block(&field, &mut lines);

        assert_eq!(lines[1], "          email *");
    }

    #[test]
    fn test_output_block() {
        let mut lines = Vec::new();
        WebMarkupTemplates.output_block(
            &EndpointSpec::new("User", HttpMethod::Get, "/api/user"),
            &mut lines,
        );

        assert_eq!(
            lines,
            vec![
                "      <div style={{ marginTop: 16 }}>",
                "        <h2>User Data</h2>",
                "        {UserLoading && <p>Loading...</p>}",
                "        {UserError && <p style={{ color: 'red' }}>Error: {UserError}</p>}",
                "        {UserData && <pre>{JSON.stringify(UserData, null, 2)}</pre>}",
                "      </div>",
            ]
        );
    }
}
