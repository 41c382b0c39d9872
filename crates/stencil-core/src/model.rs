//! Declarative component model.
//!
//! A [`ComponentModel`] is the single editable value behind one editing
//! session. Fields and endpoints keep insertion order, which is also the
//! order the synthesizer emits them in. Entries have no identity beyond
//! their position; names are free text and may repeat.

use crate::errors::ModelError;
use std::fmt;
use std::str::FromStr;

/// The component being described.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ComponentModel {
    /// Entry symbol of the emitted program.
    pub name: String,
    /// Typed state fields, in emission order.
    pub fields: Vec<FieldSpec>,
    /// Data endpoints, in emission order.
    pub endpoints: Vec<EndpointSpec>,
    /// Whether input-binding markup is emitted for each field.
    pub include_inputs: bool,
    /// Template family used for imports and markup.
    pub dialect: Dialect,
}

impl ComponentModel {
    /// Create an empty model with a component name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether the model declares neither fields nor endpoints.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.endpoints.is_empty()
    }
}

impl Default for ComponentModel {
    fn default() -> Self {
        Self {
            name: String::new(),
            fields: Vec::new(),
            endpoints: Vec::new(),
            include_inputs: true,
            dialect: Dialect::default(),
        }
    }
}

/// A typed state field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FieldSpec {
    /// Identifier fragment, used verbatim.
    pub name: String,
    /// Value kind; picks the zero value and the input widget.
    pub kind: FieldKind,
    /// Optional validation rules.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub validation: Option<ValidationRules>,
}

impl FieldSpec {
    /// Create a field without validation rules.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            validation: None,
        }
    }

    /// Attach validation rules.
    pub fn with_validation(mut self, rules: ValidationRules) -> Self {
        self.validation = Some(rules);
        self
    }

    /// Whether the field carries an enabled `required` rule.
    pub fn is_required(&self) -> bool {
        self.validation
            .as_ref()
            .and_then(|v| v.required)
            .unwrap_or(false)
    }
}

impl Default for FieldSpec {
    /// The entry appended by the editor's "add field" action.
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: FieldKind::String,
            validation: Some(ValidationRules {
                required: Some(false),
                ..ValidationRules::default()
            }),
        }
    }
}

/// Kind of a state field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldKind {
    #[default]
    String,
    Number,
    Boolean,
}

impl FieldKind {
    /// Form-control spelling of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            other => Err(ModelError::UnknownFieldKind(other.to_string())),
        }
    }
}

/// Validation rules for a field.
///
/// Every rule is independently optional; `None` means the rule is not
/// applied. Length rules and `pattern` target string fields, `min`/`max`
/// target number fields. Numeric bounds are stored as entered, including
/// NaN when the widget text did not parse.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ValidationRules {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub required: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_length: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_length: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pattern: Option<String>,
}

impl ValidationRules {
    /// Overlay every rule set in `patch` onto `self`, keeping the rest.
    pub fn merge(&mut self, patch: &ValidationRules) {
        if patch.required.is_some() {
            self.required = patch.required;
        }
        if patch.min_length.is_some() {
            self.min_length = patch.min_length;
        }
        if patch.max_length.is_some() {
            self.max_length = patch.max_length;
        }
        if patch.min.is_some() {
            self.min = patch.min;
        }
        if patch.max.is_some() {
            self.max = patch.max;
        }
        if patch.pattern.is_some() {
            self.pattern.clone_from(&patch.pattern);
        }
    }
}

/// An HTTP-backed data endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EndpointSpec {
    /// Identifier prefix for generated state and the fetch function.
    pub name: String,
    pub method: HttpMethod,
    /// Emitted verbatim as a string literal.
    pub url: String,
}

impl EndpointSpec {
    pub fn new(name: impl Into<String>, method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            url: url.into(),
        }
    }
}

impl Default for EndpointSpec {
    fn default() -> Self {
        Self::new("", HttpMethod::Get, "")
    }
}

/// Request method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case method name, as shown in the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Lower-case name used as the HTTP client call.
    pub fn client_call(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            other => Err(ModelError::UnknownMethod(other.to_string())),
        }
    }
}

/// Output template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// Web markup: `div`, `input`, `form`.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "web"))]
    WebMarkup,
    /// Mobile widgets: `View`, `Text`, `TextInput`.
    #[cfg_attr(feature = "serde", serde(rename = "mobile"))]
    MobileWidget,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebMarkup => "web",
            Self::MobileWidget => "mobile",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Self::WebMarkup),
            "mobile" => Ok(Self::MobileWidget),
            other => Err(ModelError::UnknownDialect(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        let model = ComponentModel::default();
        assert!(model.name.is_empty());
        assert!(model.is_empty());
        assert!(model.include_inputs);
        assert_eq!(model.dialect, Dialect::WebMarkup);
    }

    #[test]
    fn test_new_field_defaults() {
        let field = FieldSpec::default();
        assert_eq!(field.kind, FieldKind::String);
        assert_eq!(field.validation.as_ref().unwrap().required, Some(false));
        assert!(!field.is_required());
    }

    #[test]
    fn test_validation_merge_keeps_unnamed_rules() {
        let mut rules = ValidationRules {
            required: Some(true),
            min_length: Some(2.0),
            ..Default::default()
        };
        rules.merge(&ValidationRules {
            max_length: Some(10.0),
            ..Default::default()
        });

        assert_eq!(rules.required, Some(true));
        assert_eq!(rules.min_length, Some(2.0));
        assert_eq!(rules.max_length, Some(10.0));
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("number".parse::<FieldKind>(), Ok(FieldKind::Number));
        assert_eq!("DELETE".parse::<HttpMethod>(), Ok(HttpMethod::Delete));
        assert_eq!("mobile".parse::<Dialect>(), Ok(Dialect::MobileWidget));
        assert_eq!(
            "get".parse::<HttpMethod>(),
            Err(ModelError::UnknownMethod("get".to_string()))
        );
        assert!("text".parse::<FieldKind>().is_err());
    }

    #[test]
    fn test_method_client_call() {
        assert_eq!(HttpMethod::Post.client_call(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
