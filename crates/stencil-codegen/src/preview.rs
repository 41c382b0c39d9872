//! One-way boundary to a sandboxed live preview.
//!
//! The sandbox is an isolated page that receives generated source as a
//! message, transpiles it with a third-party script, and evaluates it. It
//! never answers: a sink accepts messages and reports nothing back. Each
//! message stands alone, and the most recent one is what the sandbox ends
//! up showing.

use crate::error::Result;
use crate::generators::{SynthesizedComponent, TemplateEngine};
use serde::{Deserialize, Serialize};

/// `sandbox` attribute for the frame hosting the preview page.
pub const SANDBOX_POLICY: &str = "allow-scripts";

/// Target origin used when posting to the sandbox.
pub const TARGET_ORIGIN: &str = "*";

const HOST_TEMPLATE: &str = "preview_host";

const HOST_DOCUMENT: &str = r#"<html>
  <body>
    <div id="{{root_id}}"></div>
    <script>
      window.addEventListener('message', (event) => {
        try {
          const code = event.data;
          const transpiledCode = Babel.transform(code, { presets: {{{presets}}} }).code;
          eval(transpiledCode);
        } catch (error) {
          document.getElementById({{{root_id_js}}}).innerHTML = '<pre style="color:red;">' + error.message + '</pre>';
        }
      }, false);
    </script>
    <script src="{{transpiler_url}}"></script>
  </body>
</html>
"#;

/// Configuration of the preview sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewOptions {
    /// Script providing the in-page transpiler.
    pub transpiler_url: String,
    /// Transpiler presets applied to every message.
    pub presets: Vec<String>,
    /// Id of the element that receives rendered output or the error trace.
    pub root_id: String,
    /// CSS height of the hosting frame.
    pub frame_height: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            transpiler_url: "https://unpkg.com/@babel/standalone/babel.min.js".to_string(),
            presets: vec!["react".to_string(), "es2015".to_string()],
            root_id: "root".to_string(),
            frame_height: "400px".to_string(),
        }
    }
}

#[derive(Serialize)]
struct HostDocumentData<'a> {
    root_id: &'a str,
    root_id_js: String,
    presets: String,
    transpiler_url: &'a str,
}

/// Render the HTML page loaded into the sandbox frame.
pub fn render_host_document(options: &PreviewOptions) -> Result<String> {
    let mut engine = TemplateEngine::new();
    engine.register_template(HOST_TEMPLATE, HOST_DOCUMENT)?;

    let data = HostDocumentData {
        root_id: &options.root_id,
        root_id_js: serde_json::to_string(&options.root_id)?,
        presets: serde_json::to_string(&options.presets)?,
        transpiler_url: &options.transpiler_url,
    };
    engine.render(HOST_TEMPLATE, &data)
}

/// Payload posted to the sandbox: the generated program, opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewMessage {
    pub source: String,
}

impl From<&SynthesizedComponent> for PreviewMessage {
    fn from(component: &SynthesizedComponent) -> Self {
        Self {
            source: component.source.clone(),
        }
    }
}

/// Receiver side of the preview boundary.
///
/// `post` has no return value: the core never learns whether the sandbox
/// transpiled, rendered or failed.
pub trait PreviewSink {
    fn post(&mut self, message: PreviewMessage);
}

/// In-memory sink that keeps the last message it was given.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    last: Option<PreviewMessage>,
    posted: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent message, if any.
    pub fn last(&self) -> Option<&PreviewMessage> {
        self.last.as_ref()
    }

    /// Number of messages received.
    pub fn posted(&self) -> usize {
        self.posted
    }
}

impl PreviewSink for RecordingSink {
    fn post(&mut self, message: PreviewMessage) {
        self.posted += 1;
        self.last = Some(message);
    }
}
