//! Live preview through a sandboxed iframe.

use log::{debug, warn};
use stencil_codegen::preview::{render_host_document, SANDBOX_POLICY, TARGET_ORIGIN};
use stencil_codegen::{PreviewMessage, PreviewOptions, PreviewSink};
use wasm_bindgen::prelude::*;
use web_sys::HtmlIFrameElement;

/// Preview sink posting generated programs into an iframe.
///
/// The frame loads the host page rendered from [`PreviewOptions`]; each
/// post is fire-and-forget.
pub struct IframePreview {
    frame: HtmlIFrameElement,
}

impl IframePreview {
    /// Turn `frame` into a preview sandbox.
    pub fn attach(frame: HtmlIFrameElement, options: &PreviewOptions) -> Result<Self, JsError> {
        let document = render_host_document(options)
            .map_err(|e| JsError::new(&format!("Preview template error: {}", e)))?;

        frame
            .set_attribute("sandbox", SANDBOX_POLICY)
            .map_err(|_| JsError::new("Failed to set sandbox policy on preview frame"))?;
        frame
            .set_attribute(
                "style",
                &format!(
                    "width: 100%; height: {}; border: 1px solid #ccc",
                    options.frame_height
                ),
            )
            .map_err(|_| JsError::new("Failed to style preview frame"))?;
        frame.set_title("Live Preview");
        frame.set_srcdoc(&document);

        debug!("preview frame attached");
        Ok(Self { frame })
    }
}

impl PreviewSink for IframePreview {
    fn post(&mut self, message: PreviewMessage) {
        let Some(window) = self.frame.content_window() else {
            debug!("preview frame has no window; message dropped");
            return;
        };
        if let Err(err) = window.post_message(&JsValue::from_str(&message.source), TARGET_ORIGIN) {
            warn!("posting to preview frame failed: {:?}", err);
        }
    }
}
