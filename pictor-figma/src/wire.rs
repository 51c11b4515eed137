//! Figma REST payloads, reduced to the fields pictor reads.

use std::collections::BTreeMap;

use pictor_ir::RawComponent;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ComponentsResponse {
    pub meta: ComponentsMeta,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComponentsMeta {
    #[serde(default)]
    pub components: Vec<WireComponent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireComponent {
    pub node_id: String,
    pub name: String,
    #[serde(default)]
    pub containing_frame: Option<ContainingFrame>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContainingFrame {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<WireComponent> for RawComponent {
    fn from(component: WireComponent) -> Self {
        RawComponent {
            id: component.node_id,
            name: component.name,
            containing_frame_name: component.containing_frame.and_then(|frame| frame.name),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImagesResponse {
    #[serde(default)]
    pub images: BTreeMap<String, Option<String>>,
}

/// Error body; the API uses `err` on some endpoints and `message` on others.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub err: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self, fallback: &str) -> String {
        self.err
            .or(self.message)
            .unwrap_or_else(|| fallback.to_string())
    }
}
