//! Dialect-independent component assembly.

use super::validation::field_checks;
use super::{setter_name, templates_for, MarkupDialect, SynthesizedComponent};
use log::debug;
use stencil_core::{ComponentModel, EndpointSpec, FieldKind, FieldSpec};

/// Body of the submit action, shared by both dialects.
const SUBMIT_HANDLER: [&str; 6] = [
    "const errors = validate();",
    "if (Object.keys(errors).length === 0) {",
    "  console.log('Form is valid');",
    "} else {",
    "  console.log('Validation errors:', errors);",
    "}",
];

/// Generate the component program for `model`.
pub fn synthesize(model: &ComponentModel) -> String {
    synthesize_component(model).source
}

/// Generate the component program and tag it with its dialect.
pub fn synthesize_component(model: &ComponentModel) -> SynthesizedComponent {
    let templates = templates_for(model.dialect);
    let source = assemble(model, templates);

    debug!(
        "synthesized {:?} ({} dialect): {} fields, {} endpoints, {} bytes",
        model.name,
        model.dialect,
        model.fields.len(),
        model.endpoints.len(),
        source.len()
    );

    SynthesizedComponent {
        source,
        dialect: model.dialect,
    }
}

fn assemble(model: &ComponentModel, templates: &dyn MarkupDialect) -> String {
    let mut lines: Vec<String> = templates.imports().iter().map(|s| s.to_string()).collect();
    lines.push(String::new());
    lines.push(format!("function {}() {{", model.name));

    // State
    lines.push("  // State".to_string());
    for field in &model.fields {
        lines.push(format!("  {}", state_declaration(field)));
    }
    lines.push(String::new());

    // Endpoint state
    lines.push("  // Endpoint state".to_string());
    for endpoint in &model.endpoints {
        let name = &endpoint.name;
        lines.push(format!("  const [{}Data, set{}Data] = useState(null);", name, name));
        lines.push(format!("  const [{}Loading, set{}Loading] = useState(false);", name, name));
        lines.push(format!("  const [{}Error, set{}Error] = useState(null);", name, name));
    }
    lines.push(String::new());

    // Fetch functions
    lines.push("  // Fetch functions".to_string());
    for (i, endpoint) in model.endpoints.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        push_fetch_function(endpoint, &mut lines);
    }
    lines.push(String::new());

    // Validation
    lines.push("  // Validation".to_string());
    lines.push("  const validate = () => {".to_string());
    lines.push("    const errors = {};".to_string());
    for field in &model.fields {
        for check in field_checks(field) {
            lines.push(format!("    {}", check));
        }
    }
    lines.push("    return errors;".to_string());
    lines.push("  };".to_string());
    lines.push(String::new());

    // Initial fetch
    lines.push("  useEffect(() => {".to_string());
    for endpoint in &model.endpoints {
        lines.push(format!("    fetch{}();", endpoint.name));
    }
    lines.push("  }, []);".to_string());
    lines.push(String::new());

    // Render tree
    lines.push("  return (".to_string());
    templates.open_tree(&model.name, &mut lines);
    if model.include_inputs {
        for field in &model.fields {
            templates.input_block(field, &mut lines);
        }
    }
    templates.submit_action(&SUBMIT_HANDLER, &mut lines);
    for endpoint in &model.endpoints {
        templates.output_block(endpoint, &mut lines);
    }
    templates.close_tree(&mut lines);
    lines.push("  );".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push(format!("export default {};", model.name));

    lines.join("\n")
}

/// `const [name, setName] = useState(zero);`
fn state_declaration(field: &FieldSpec) -> String {
    format!(
        "const [{}, {}] = useState({});",
        field.name,
        setter_name(&field.name),
        zero_value(field.kind)
    )
}

fn zero_value(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::String => "\"\"",
        FieldKind::Number => "0",
        FieldKind::Boolean => "false",
    }
}

fn push_fetch_function(endpoint: &EndpointSpec, lines: &mut Vec<String>) {
    let name = &endpoint.name;
    lines.push(format!("  const fetch{} = async () => {{", name));
    lines.push("    try {".to_string());
    lines.push(format!("      set{}Loading(true);", name));
    lines.push(format!("      set{}Error(null);", name));
    lines.push(format!(
        "      const response = await axios.{}('{}');",
        endpoint.method.client_call(),
        endpoint.url
    ));
    lines.push(format!("      set{}Data(response.data);", name));
    lines.push("    } catch (error) {".to_string());
    lines.push(format!("      set{}Error(error.message);", name));
    lines.push("    } finally {".to_string());
    lines.push(format!("      set{}Loading(false);", name));
    lines.push("    }".to_string());
    lines.push("  };".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_core::{Dialect, HttpMethod, ValidationRules};

    #[test]
    fn test_zero_values() {
        assert_eq!(
            state_declaration(&FieldSpec::new("title", FieldKind::String)),
            "const [title, setTitle] = useState(\"\");"
        );
        assert_eq!(
            state_declaration(&FieldSpec::new("age", FieldKind::Number)),
            "const [age, setAge] = useState(0);"
        );
        assert_eq!(
            state_declaration(&FieldSpec::new("active", FieldKind::Boolean)),
            "const [active, setActive] = useState(false);"
        );
    }

    #[test]
    fn test_fetch_function_shape() {
        let mut lines = Vec::new();
        push_fetch_function(
            &EndpointSpec::new("Orders", HttpMethod::Delete, "/api/orders?id=1&x='y'"),
            &mut lines,
        );
        let text = lines.join("\n");

        assert!(text.starts_with("  const fetchOrders = async () => {"));
        assert!(text.contains("await axios.delete('/api/orders?id=1&x='y'');"));

        let loading_on = text.find("setOrdersLoading(true);").unwrap();
        let error_cleared = text.find("setOrdersError(null);").unwrap();
        let request = text.find("await axios").unwrap();
        let finally = text.find("} finally {").unwrap();
        let loading_off = text.find("setOrdersLoading(false);").unwrap();
        assert!(loading_on < error_cleared && error_cleared < request);
        assert!(finally < loading_off);
        assert_eq!(text.matches("setOrdersLoading(false);").count(), 1);
    }

    #[test]
    fn test_checks_follow_field_order() {
        let mut model = ComponentModel::new("Form");
        model.fields.push(FieldSpec::new("b", FieldKind::Boolean).with_validation(
            ValidationRules {
                required: Some(true),
                ..Default::default()
            },
        ));
        model.fields.push(FieldSpec::new("a", FieldKind::String).with_validation(
            ValidationRules {
                required: Some(true),
                ..Default::default()
            },
        ));

        let code = synthesize(&model);
        assert!(code.find("if (!b)").unwrap() < code.find("if (!a)").unwrap());
    }

    #[test]
    fn test_inputs_toggle() {
        let mut model = ComponentModel::new("Form");
        model.fields.push(FieldSpec::new("title", FieldKind::String));

        assert!(synthesize(&model).contains("onChange={(e) => setTitle(e.target.value)}"));

        model.include_inputs = false;
        let code = synthesize(&model);
        assert!(!code.contains("setTitle(e.target.value)"));
        assert!(code.contains("const [title, setTitle] = useState(\"\");"));
    }

    #[test]
    fn test_component_tag() {
        let mut model = ComponentModel::new("Tagged");
        model.dialect = Dialect::MobileWidget;

        let component = synthesize_component(&model);
        assert_eq!(component.dialect, Dialect::MobileWidget);
        assert_eq!(component.highlight_language(), "typescript");
        assert!(component.source.ends_with("export default Tagged;"));
    }
}
