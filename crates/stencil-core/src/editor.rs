//! Model editor: position-addressed mutations over a [`ComponentModel`].
//!
//! Every operation is total. Positions outside the current list are
//! ignored, and values are stored as given without validation.

use crate::model::{ComponentModel, Dialect, EndpointSpec, FieldKind, FieldSpec, HttpMethod, ValidationRules};
use log::debug;

/// Partial update for a [`FieldSpec`].
///
/// `name` and `kind` replace the current values; `validation` is merged
/// into the existing rule record rule by rule.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FieldPatch {
    pub name: Option<String>,
    pub kind: Option<FieldKind>,
    pub validation: Option<ValidationRules>,
}

impl FieldPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn kind(kind: FieldKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn validation(rules: ValidationRules) -> Self {
        Self {
            validation: Some(rules),
            ..Self::default()
        }
    }

    fn apply(&self, field: &mut FieldSpec) {
        if let Some(name) = &self.name {
            field.name.clone_from(name);
        }
        if let Some(kind) = self.kind {
            field.kind = kind;
        }
        if let Some(patch) = &self.validation {
            field
                .validation
                .get_or_insert_with(ValidationRules::default)
                .merge(patch);
        }
    }
}

/// Partial update for an [`EndpointSpec`]; a flat overwrite of the set
/// members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct EndpointPatch {
    pub name: Option<String>,
    pub method: Option<HttpMethod>,
    pub url: Option<String>,
}

impl EndpointPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn method(method: HttpMethod) -> Self {
        Self {
            method: Some(method),
            ..Self::default()
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    fn apply(&self, endpoint: &mut EndpointSpec) {
        if let Some(name) = &self.name {
            endpoint.name.clone_from(name);
        }
        if let Some(method) = self.method {
            endpoint.method = method;
        }
        if let Some(url) = &self.url {
            endpoint.url.clone_from(url);
        }
    }
}

/// Owner of the model for one editing session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelEditor {
    model: ComponentModel,
}

impl ModelEditor {
    /// Start a session with an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing snapshot.
    pub fn from_model(model: ComponentModel) -> Self {
        Self { model }
    }

    /// Current model snapshot.
    pub fn model(&self) -> &ComponentModel {
        &self.model
    }

    /// End the session, handing back the model.
    pub fn into_model(self) -> ComponentModel {
        self.model
    }

    pub fn field(&self, position: usize) -> Option<&FieldSpec> {
        self.model.fields.get(position)
    }

    pub fn endpoint(&self, position: usize) -> Option<&EndpointSpec> {
        self.model.endpoints.get(position)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.model.name = name.into();
        debug!("component name set to {:?}", self.model.name);
    }

    pub fn set_include_inputs(&mut self, include: bool) {
        self.model.include_inputs = include;
        debug!("include_inputs = {}", include);
    }

    pub fn set_dialect(&mut self, dialect: Dialect) {
        self.model.dialect = dialect;
        debug!("dialect = {}", dialect);
    }

    /// Append a blank string field with `required: false`.
    pub fn add_field(&mut self) {
        self.model.fields.push(FieldSpec::default());
        debug!("field added at {}", self.model.fields.len() - 1);
    }

    /// Remove the field at `position`, if any.
    pub fn remove_field(&mut self, position: usize) {
        if position < self.model.fields.len() {
            self.model.fields.remove(position);
            debug!("field {} removed", position);
        } else {
            debug!("remove_field({}) ignored: {} fields", position, self.model.fields.len());
        }
    }

    /// Merge `patch` into the field at `position`, if any.
    pub fn update_field(&mut self, position: usize, patch: &FieldPatch) {
        match self.model.fields.get_mut(position) {
            Some(field) => {
                patch.apply(field);
                debug!("field {} updated: {:?}", position, patch);
            }
            None => debug!("update_field({}) ignored: {} fields", position, self.model.fields.len()),
        }
    }

    /// Append a blank GET endpoint.
    pub fn add_endpoint(&mut self) {
        self.model.endpoints.push(EndpointSpec::default());
        debug!("endpoint added at {}", self.model.endpoints.len() - 1);
    }

    /// Remove the endpoint at `position`, if any.
    pub fn remove_endpoint(&mut self, position: usize) {
        if position < self.model.endpoints.len() {
            self.model.endpoints.remove(position);
            debug!("endpoint {} removed", position);
        } else {
            debug!(
                "remove_endpoint({}) ignored: {} endpoints",
                position,
                self.model.endpoints.len()
            );
        }
    }

    /// Overwrite the set members of `patch` on the endpoint at `position`.
    pub fn update_endpoint(&mut self, position: usize, patch: &EndpointPatch) {
        match self.model.endpoints.get_mut(position) {
            Some(endpoint) => {
                patch.apply(endpoint);
                debug!("endpoint {} updated: {:?}", position, patch);
            }
            None => debug!(
                "update_endpoint({}) ignored: {} endpoints",
                position,
                self.model.endpoints.len()
            ),
        }
    }
}

impl From<ComponentModel> for ModelEditor {
    fn from(model: ComponentModel) -> Self {
        Self::from_model(model)
    }
}

/// Coerce numeric widget text into a rule bound.
///
/// Reads an optional sign and the leading decimal digits after any
/// whitespace, ignoring whatever follows. Text without leading digits
/// yields NaN, which the editor stores unchanged.
pub fn parse_numeric_input(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return f64::NAN;
    }

    // Digit-only input always parses; overflow saturates to infinity.
    let value: f64 = rest[..digits_end].parse().unwrap_or(f64::NAN);
    if negative {
        -value
    } else {
        value
    }
}
