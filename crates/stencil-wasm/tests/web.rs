//! Browser-side tests for the JS surface. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use stencil_core::{ComponentModel, EndpointPatch, FieldKind, FieldPatch, HttpMethod};
use stencil_wasm::{PreviewOptionsJs, StencilSession};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn update_field_from_object() {
    let mut session = StencilSession::new();
    session.add_field();

    let patch = serde_wasm_bindgen::to_value(&FieldPatch {
        name: Some("count".to_string()),
        kind: Some(FieldKind::Number),
        validation: None,
    })
    .unwrap();
    session.update_field(0, patch).unwrap();

    let model: ComponentModel = serde_wasm_bindgen::from_value(session.model().unwrap()).unwrap();
    assert_eq!(model.fields[0].name, "count");
    assert_eq!(model.fields[0].kind, FieldKind::Number);
}

#[wasm_bindgen_test]
fn update_endpoint_and_generate() {
    let mut session = StencilSession::new();
    session.set_name("Orders");
    session.add_endpoint();
    let patch = serde_wasm_bindgen::to_value(&EndpointPatch {
        name: Some("Orders".to_string()),
        method: Some(HttpMethod::Delete),
        url: Some("/api/orders".to_string()),
    })
    .unwrap();
    session.update_endpoint(0, patch).unwrap();

    let code = session.generate();
    assert!(code.contains("await axios.delete('/api/orders');"));
    assert!(!session.last_output().unwrap().is_null());
}

#[wasm_bindgen_test]
fn rejects_unknown_values() {
    let mut session = StencilSession::new();
    session.add_field();
    assert!(session.set_field_kind(0, "date").is_err());
    assert!(session.set_dialect("desktop").is_err());
    assert!(session.set_field_rule(0, "step", "1").is_err());
    assert!(session.update_field(0, JsValue::from_str("nope")).is_err());
}

#[wasm_bindgen_test]
fn preview_document_follows_options() {
    let mut session = StencilSession::new();
    let options = serde_wasm_bindgen::to_value(&PreviewOptionsJs {
        root_id: Some("stage".to_string()),
        ..Default::default()
    })
    .unwrap();
    session.set_preview_options(options).unwrap();

    let html = session.preview_document().unwrap();
    assert!(html.contains(r#"<div id="stage"></div>"#));
}
