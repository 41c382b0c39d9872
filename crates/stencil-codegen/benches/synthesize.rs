//! Synthesis benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stencil_codegen::synthesize;
use stencil_core::{
    ComponentModel, Dialect, EndpointSpec, FieldKind, FieldSpec, HttpMethod, ValidationRules,
};

fn form_model(fields: usize, endpoints: usize, dialect: Dialect) -> ComponentModel {
    let mut model = ComponentModel::new("Bench");
    model.dialect = dialect;
    for i in 0..fields {
        let kind = match i % 3 {
            0 => FieldKind::String,
            1 => FieldKind::Number,
            _ => FieldKind::Boolean,
        };
        model.fields.push(FieldSpec::new(format!("field{}", i), kind).with_validation(
            ValidationRules {
                required: Some(true),
                min_length: Some(1.0),
                max_length: Some(64.0),
                min: Some(0.0),
                max: Some(100.0),
                pattern: Some("^\\w+$".to_string()),
            },
        ));
    }
    for i in 0..endpoints {
        model
            .endpoints
            .push(EndpointSpec::new(format!("Resource{}", i), HttpMethod::Get, format!("/api/{}", i)));
    }
    model
}

fn synthesize_small(c: &mut Criterion) {
    let model = form_model(3, 1, Dialect::WebMarkup);
    c.bench_function("synthesize_small", |b| b.iter(|| synthesize(black_box(&model))));
}

fn synthesize_large(c: &mut Criterion) {
    let web = form_model(60, 20, Dialect::WebMarkup);
    let mobile = form_model(60, 20, Dialect::MobileWidget);
    c.bench_function("synthesize_large_web", |b| b.iter(|| synthesize(black_box(&web))));
    c.bench_function("synthesize_large_mobile", |b| {
        b.iter(|| synthesize(black_box(&mobile)))
    });
}

criterion_group!(benches, synthesize_small, synthesize_large);
criterion_main!(benches);
