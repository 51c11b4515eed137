//! Loaded icon assets.

use serde::{Deserialize, Serialize};

use crate::IconKey;

/// One attribute of an SVG root element, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgAttribute {
    pub name: String,
    pub value: String,
}

impl SvgAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An icon ready for code generation.
///
/// Built once per pipeline run from an optimized SVG asset and never mutated
/// afterwards; every emission target reads the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub key: IconKey,
    /// PascalCase identifier the generated wrapper is exported under.
    pub export_name: String,
    /// Root `<svg>` attributes in document order.
    pub attributes: Vec<SvgAttribute>,
    /// Serialized children of the root `<svg>` element.
    pub inner_markup: String,
}

impl Icon {
    pub fn new(
        key: IconKey,
        export_name: impl Into<String>,
        attributes: Vec<SvgAttribute>,
        inner_markup: impl Into<String>,
    ) -> Self {
        Self {
            key,
            export_name: export_name.into(),
            attributes,
            inner_markup: inner_markup.into(),
        }
    }

    /// Size-independent icon name.
    pub fn name(&self) -> &str {
        &self.key.name
    }

    pub fn size(&self) -> &str {
        self.key.size.as_str()
    }
}
