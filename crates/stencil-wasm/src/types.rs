//! JavaScript-facing value types for the bindings.

use serde::{Deserialize, Serialize};
use stencil_codegen::{PreviewOptions, SynthesizedComponent};

/// Preview configuration from JavaScript; unset members keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOptionsJs {
    #[serde(default)]
    pub transpiler_url: Option<String>,
    #[serde(default)]
    pub presets: Option<Vec<String>>,
    #[serde(default)]
    pub root_id: Option<String>,
    #[serde(default)]
    pub frame_height: Option<String>,
}

impl PreviewOptionsJs {
    /// Overlay the provided members on `base`.
    pub fn apply_to(self, base: &PreviewOptions) -> PreviewOptions {
        let mut opts = base.clone();
        if let Some(url) = self.transpiler_url {
            opts.transpiler_url = url;
        }
        if let Some(presets) = self.presets {
            opts.presets = presets;
        }
        if let Some(root_id) = self.root_id {
            opts.root_id = root_id;
        }
        if let Some(height) = self.frame_height {
            opts.frame_height = height;
        }
        opts
    }
}

/// Generated program with the tags a display surface needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedComponentJs {
    pub source: String,
    pub dialect: String,
    pub highlight_language: String,
}

impl From<&SynthesizedComponent> for GeneratedComponentJs {
    fn from(component: &SynthesizedComponent) -> Self {
        Self {
            source: component.source.clone(),
            dialect: component.dialect.to_string(),
            highlight_language: component.highlight_language().to_string(),
        }
    }
}
