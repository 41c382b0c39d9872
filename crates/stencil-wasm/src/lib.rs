//! WebAssembly bindings for the Stencil component generator.
//!
//! The browser form owns no state of its own: every control forwards to a
//! [`StencilSession`], and the "Generate" button reads the synthesized
//! program back.
//!
//! ## Example
//!
//! ```js
//! import { StencilSession } from 'stencil-wasm';
//!
//! const session = new StencilSession();
//! session.setName('Profile');
//!
//! session.addField();
//! session.setFieldName(0, 'age');
//! session.setFieldKind(0, 'number');
//! session.setFieldRule(0, 'min', '0');
//!
//! session.addEndpoint();
//! session.updateEndpoint(0, { name: 'User', url: '/api/user' });
//!
//! session.attachPreview(document.querySelector('iframe'));
//! const code = session.generate();
//! ```

use log::{Level, LevelFilter};
use stencil_codegen::render_host_document;
use stencil_core::{ComponentModel, EndpointPatch, FieldPatch, ModelEditor};
use wasm_bindgen::prelude::*;
use web_sys::HtmlIFrameElement;

mod preview;
mod session;
mod types;

pub use preview::IframePreview;
pub use session::{EditingSession, RuleName, SessionError};
pub use types::{GeneratedComponentJs, PreviewOptionsJs};

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Warn
    };
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

/// Change the console log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| JsError::new(&format!("Invalid log level: {}", level)))?;
    log::set_max_level(level);
    Ok(())
}

/// One editing session of the component form.
#[wasm_bindgen]
pub struct StencilSession {
    session: EditingSession,
    preview: Option<IframePreview>,
}

#[wasm_bindgen]
impl StencilSession {
    /// Start a session with an empty model.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: EditingSession::new(),
            preview: None,
        }
    }

    /// Get the version of the generator.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Snapshot of the current model as a plain object.
    #[wasm_bindgen]
    pub fn model(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.session.editor.model())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Replace the model with a snapshot.
    #[wasm_bindgen(js_name = loadModel)]
    pub fn load_model(&mut self, model: JsValue) -> Result<(), JsError> {
        let model: ComponentModel = serde_wasm_bindgen::from_value(model)
            .map_err(|e| JsError::new(&format!("Invalid model: {}", e)))?;
        self.session.editor = ModelEditor::from_model(model);
        Ok(())
    }

    #[wasm_bindgen(js_name = setName)]
    pub fn set_name(&mut self, name: &str) {
        self.session.editor.set_name(name);
    }

    #[wasm_bindgen(js_name = setIncludeInputs)]
    pub fn set_include_inputs(&mut self, include: bool) {
        self.session.editor.set_include_inputs(include);
    }

    /// Select the output dialect (`web` or `mobile`).
    #[wasm_bindgen(js_name = setDialect)]
    pub fn set_dialect(&mut self, dialect: &str) -> Result<(), JsError> {
        self.session
            .set_dialect(dialect)
            .map_err(|e| JsError::new(&format!("Invalid dialect: {}", e)))
    }

    #[wasm_bindgen(js_name = addField)]
    pub fn add_field(&mut self) {
        self.session.editor.add_field();
    }

    #[wasm_bindgen(js_name = removeField)]
    pub fn remove_field(&mut self, position: usize) {
        self.session.remove_field(position);
    }

    /// Merge a partial field object (`{ name?, kind?, validation? }`).
    #[wasm_bindgen(js_name = updateField)]
    pub fn update_field(&mut self, position: usize, patch: JsValue) -> Result<(), JsError> {
        let patch: FieldPatch = serde_wasm_bindgen::from_value(patch)
            .map_err(|e| JsError::new(&format!("Invalid field patch: {}", e)))?;
        self.session.editor.update_field(position, &patch);
        Ok(())
    }

    #[wasm_bindgen(js_name = setFieldName)]
    pub fn set_field_name(&mut self, position: usize, name: &str) {
        self.session.editor.update_field(position, &FieldPatch::name(name));
    }

    /// Set the field kind from its select value (`string`, `number`, `boolean`).
    #[wasm_bindgen(js_name = setFieldKind)]
    pub fn set_field_kind(&mut self, position: usize, kind: &str) -> Result<(), JsError> {
        self.session
            .set_field_kind(position, kind)
            .map_err(|e| JsError::new(&format!("Invalid field kind: {}", e)))
    }

    /// Set one validation rule from the raw text of its control.
    #[wasm_bindgen(js_name = setFieldRule)]
    pub fn set_field_rule(&mut self, position: usize, rule: &str, text: &str) -> Result<(), JsError> {
        self.session
            .set_field_rule(position, rule, text)
            .map_err(|e| JsError::new(&format!("Invalid validation rule: {}", e)))
    }

    #[wasm_bindgen(js_name = addEndpoint)]
    pub fn add_endpoint(&mut self) {
        self.session.editor.add_endpoint();
    }

    #[wasm_bindgen(js_name = removeEndpoint)]
    pub fn remove_endpoint(&mut self, position: usize) {
        self.session.editor.remove_endpoint(position);
    }

    /// Overwrite members of an endpoint (`{ name?, method?, url? }`).
    #[wasm_bindgen(js_name = updateEndpoint)]
    pub fn update_endpoint(&mut self, position: usize, patch: JsValue) -> Result<(), JsError> {
        let patch: EndpointPatch = serde_wasm_bindgen::from_value(patch)
            .map_err(|e| JsError::new(&format!("Invalid endpoint patch: {}", e)))?;
        self.session.editor.update_endpoint(position, &patch);
        Ok(())
    }

    #[wasm_bindgen(js_name = setEndpointName)]
    pub fn set_endpoint_name(&mut self, position: usize, name: &str) {
        self.session
            .editor
            .update_endpoint(position, &EndpointPatch::name(name));
    }

    #[wasm_bindgen(js_name = setEndpointMethod)]
    pub fn set_endpoint_method(&mut self, position: usize, method: &str) -> Result<(), JsError> {
        self.session
            .set_endpoint_method(position, method)
            .map_err(|e| JsError::new(&format!("Invalid method: {}", e)))
    }

    #[wasm_bindgen(js_name = setEndpointUrl)]
    pub fn set_endpoint_url(&mut self, position: usize, url: &str) {
        self.session
            .editor
            .update_endpoint(position, &EndpointPatch::url(url));
    }

    /// Synthesize the component, show the code view, and post the program
    /// to the attached preview. Returns the program text.
    #[wasm_bindgen]
    pub fn generate(&mut self) -> String {
        let preview = self
            .preview
            .as_mut()
            .map(|p| p as &mut dyn stencil_codegen::PreviewSink);
        self.session.generate(preview).source.clone()
    }

    /// Text of the last generation, empty before the first one.
    #[wasm_bindgen(js_name = generatedCode)]
    pub fn generated_code(&self) -> String {
        self.session.generated_code().to_string()
    }

    /// Last generation with its dialect and highlight language, or null.
    #[wasm_bindgen(js_name = lastOutput)]
    pub fn last_output(&self) -> Result<JsValue, JsError> {
        match self.session.last_output() {
            Some(component) => serde_wasm_bindgen::to_value(&GeneratedComponentJs::from(component))
                .map_err(|e| JsError::new(&format!("Serialization error: {}", e))),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(getter, js_name = showPreview)]
    pub fn show_preview(&self) -> bool {
        self.session.show_preview()
    }

    #[wasm_bindgen(js_name = togglePreview)]
    pub fn toggle_preview(&mut self) -> bool {
        self.session.toggle_preview()
    }

    /// Field whose validation panel is open, if any.
    #[wasm_bindgen(getter, js_name = validationPanel)]
    pub fn validation_panel(&self) -> Option<usize> {
        self.session.validation_panel()
    }

    #[wasm_bindgen(js_name = toggleValidationPanel)]
    pub fn toggle_validation_panel(&mut self, position: usize) -> Option<usize> {
        self.session.toggle_validation_panel(position)
    }

    /// Set preview options (partial object; missing members keep their value).
    #[wasm_bindgen(js_name = setPreviewOptions)]
    pub fn set_preview_options(&mut self, options: JsValue) -> Result<(), JsError> {
        let opts: PreviewOptionsJs = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid preview options: {}", e)))?;
        self.session.preview_options = opts.apply_to(&self.session.preview_options);
        Ok(())
    }

    /// HTML of the sandbox page for the current preview options.
    #[wasm_bindgen(js_name = previewDocument)]
    pub fn preview_document(&self) -> Result<String, JsError> {
        render_host_document(&self.session.preview_options)
            .map_err(|e| JsError::new(&format!("Preview template error: {}", e)))
    }

    /// Use `frame` as the live preview; replaces any attached frame.
    #[wasm_bindgen(js_name = attachPreview)]
    pub fn attach_preview(&mut self, frame: HtmlIFrameElement) -> Result<(), JsError> {
        self.preview = Some(IframePreview::attach(frame, &self.session.preview_options)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = detachPreview)]
    pub fn detach_preview(&mut self) {
        self.preview = None;
    }
}

impl Default for StencilSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new() {
        let session = StencilSession::new();
        assert!(session.preview.is_none());
        assert!(session.session.editor.model().is_empty());
        assert!(!session.show_preview());
    }

    #[test]
    fn test_set_log_level() {
        assert!(set_log_level("info").is_ok());
        assert_eq!(log::max_level(), LevelFilter::Info);
        assert!(set_log_level("off").is_ok());
        assert_eq!(log::max_level(), LevelFilter::Off);
    }

    #[test]
    fn test_version() {
        assert!(!StencilSession::version().is_empty());
    }

    #[test]
    fn test_generate_without_frame() {
        let mut session = StencilSession::new();
        session.set_name("Panel");
        session.add_field();
        session.set_field_name(0, "title");
        session.add_endpoint();
        session.set_endpoint_name(0, "Items");
        session.set_endpoint_url(0, "/api/items");

        let code = session.generate();
        assert!(code.contains("const [title, setTitle] = useState(\"\");"));
        assert!(code.contains("await axios.get('/api/items');"));
        assert_eq!(session.generated_code(), code);
        assert!(session.show_preview());
    }

    #[test]
    fn test_remove_field_and_panel() {
        let mut session = StencilSession::new();
        session.add_field();
        session.add_field();
        assert_eq!(session.toggle_validation_panel(1), Some(1));

        session.remove_field(0);
        assert_eq!(session.validation_panel(), Some(0));
    }
}
