//! Validation checks emitted into the `validate` routine.

use super::js_number;
use stencil_core::{FieldKind, FieldSpec};

/// Checks for one field, in the fixed rule order
/// `required`, `minLength`, `maxLength`, `min`, `max`, `pattern`.
///
/// `min` and `max` only apply to number fields. A `required` rule set to
/// `false` and an empty pattern emit nothing. Each failing check assigns its
/// message into `errors`, so a later failure overwrites an earlier one.
pub(crate) fn field_checks(field: &FieldSpec) -> Vec<String> {
    let Some(rules) = &field.validation else {
        return Vec::new();
    };
    let name = field.name.as_str();
    let mut checks = Vec::new();

    if rules.required == Some(true) {
        checks.push(format!(
            "if (!{}) errors.{} = 'This field is required';",
            name, name
        ));
    }
    if let Some(min_length) = rules.min_length {
        let n = js_number(min_length);
        checks.push(format!(
            "if ({}.length < {}) errors.{} = 'Minimum length is {}';",
            name, n, name, n
        ));
    }
    if let Some(max_length) = rules.max_length {
        let n = js_number(max_length);
        checks.push(format!(
            "if ({}.length > {}) errors.{} = 'Maximum length is {}';",
            name, n, name, n
        ));
    }
    if field.kind == FieldKind::Number {
        if let Some(min) = rules.min {
            let n = js_number(min);
            checks.push(format!(
                "if ({} < {}) errors.{} = 'Minimum value is {}';",
                name, n, name, n
            ));
        }
        if let Some(max) = rules.max {
            let n = js_number(max);
            checks.push(format!(
                "if ({} > {}) errors.{} = 'Maximum value is {}';",
                name, n, name, n
            ));
        }
    }
    if let Some(pattern) = rules.pattern.as_deref().filter(|p| !p.is_empty()) {
        checks.push(format!(
            "if (!new RegExp('{}').test({})) errors.{} = 'Invalid format';",
            pattern, name, name
        ));
    }

    checks
}
