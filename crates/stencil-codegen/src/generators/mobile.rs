//! Mobile widget templates: `View`, `Text`, `TextInput`, `Button`.

use super::{push_indented, setter_name, MarkupDialect};
use stencil_core::{Dialect, EndpointSpec, FieldKind, FieldSpec};

const IMPORTS: &[&str] = &[
    "import React, { useState, useEffect } from 'react';",
    "import { View, Text, TextInput, Button } from 'react-native';",
    "import axios from 'axios';",
];

/// Templates for native mobile components.
///
/// Every field kind renders as a `TextInput`; the kind only picks the
/// keyboard hint and how the typed text is converted back.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileWidgetTemplates;

impl MobileWidgetTemplates {
    fn keyboard_type(kind: FieldKind) -> &'static str {
        match kind {
            FieldKind::Number => "'numeric'",
            FieldKind::String | FieldKind::Boolean => "undefined",
        }
    }

    /// Bound value and change handler.
    fn binding(field: &FieldSpec) -> (String, String) {
        let name = &field.name;
        let setter = setter_name(name);
        match field.kind {
            FieldKind::String => (
                format!("value={{{}}}", name),
                format!("onChangeText={{(text) => {}(text)}}", setter),
            ),
            FieldKind::Number => (
                format!("value={{String({})}}", name),
                format!("onChangeText={{(text) => {}(Number(text))}}", setter),
            ),
            FieldKind::Boolean => (
                format!("value={{String({})}}", name),
                format!("onChangeText={{(text) => {}(text === 'true')}}", setter),
            ),
        }
    }
}

impl MarkupDialect for MobileWidgetTemplates {
    fn dialect(&self) -> Dialect {
        Dialect::MobileWidget
    }

    fn imports(&self) -> &'static [&'static str] {
        IMPORTS
    }

    fn open_tree(&self, component: &str, lines: &mut Vec<String>) {
        lines.push("    <View style={{ padding: 16 }}>".to_string());
        lines.push(format!(
            "      <Text style={{{{ fontSize: 24, fontWeight: 'bold', marginBottom: 16 }}}}>{}</Text>",
            component
        ));
        lines.push("      <View>".to_string());
    }

    fn input_block(&self, field: &FieldSpec, lines: &mut Vec<String>) {
        let (value, handler) = Self::binding(field);
        let marker = if field.is_required() { " *" } else { "" };

        lines.push("        <View style={{ marginBottom: 16 }}>".to_string());
        lines.push(format!(
            "          <Text style={{{{ fontSize: 16 }}}}>{}{}</Text>",
            field.name, marker
        ));
        lines.push("          <TextInput".to_string());
        lines.push(
            "            style={{ borderWidth: 1, borderColor: '#ccc', padding: 8, borderRadius: 4 }}"
                .to_string(),
        );
        lines.push(format!("            {}", value));
        lines.push(format!("            {}", handler));
        lines.push(format!(
            "            keyboardType={{{}}}",
            Self::keyboard_type(field.kind)
        ));
        lines.push("          />".to_string());
        lines.push("        </View>".to_string());
    }

    fn submit_action(&self, handler: &[&str], lines: &mut Vec<String>) {
        lines.push("        <Button".to_string());
        lines.push("          title=\"Submit\"".to_string());
        lines.push("          onPress={() => {".to_string());
        push_indented(lines, handler, 12);
        lines.push("          }}".to_string());
        lines.push("        />".to_string());
        lines.push("      </View>".to_string());
    }

    fn output_block(&self, endpoint: &EndpointSpec, lines: &mut Vec<String>) {
        let name = &endpoint.name;
        lines.push("      <View style={{ marginTop: 16 }}>".to_string());
        lines.push(format!(
            "        <Text style={{{{ fontSize: 20, fontWeight: 'bold' }}}}>{} Data</Text>",
            name
        ));
        lines.push(format!("        {{{}Loading && <Text>Loading...</Text>}}", name));
        lines.push(format!(
            "        {{{}Error && <Text style={{{{ color: 'red' }}}}>Error: {{{}Error}}</Text>}}",
            name, name
        ));
        lines.push(format!(
            "        {{{}Data && <Text>{{JSON.stringify({}Data, null, 2)}}</Text>}}",
            name, name
        ));
        lines.push("      </View>".to_string());
    }

    fn close_tree(&self, lines: &mut Vec<String>) {
        lines.push("    </View>".to_string());
    }
}
