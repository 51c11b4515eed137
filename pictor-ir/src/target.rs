//! Emission targets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A UI-component ecosystem wrapper modules are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum EmissionTarget {
    /// Custom elements built on lit.
    #[serde(rename = "elements")]
    WebComponent,
    /// React function components.
    #[serde(rename = "react")]
    ComponentGraph,
    /// Vue functional components.
    #[serde(rename = "vue")]
    Template,
}

impl EmissionTarget {
    /// Every target, in generation order.
    pub const ALL: [EmissionTarget; 3] = [
        EmissionTarget::WebComponent,
        EmissionTarget::ComponentGraph,
        EmissionTarget::Template,
    ];

    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmissionTarget::WebComponent => "elements",
            EmissionTarget::ComponentGraph => "react",
            EmissionTarget::Template => "vue",
        }
    }

    /// Output directory for this target, relative to the output root.
    pub fn dir_name(&self) -> &'static str {
        self.as_str()
    }

    /// File extension of generated modules, without the dot.
    pub fn extension(&self) -> &'static str {
        "js"
    }
}

impl fmt::Display for EmissionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmissionTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "elements" | "lit" | "web-component" => Ok(EmissionTarget::WebComponent),
            "react" => Ok(EmissionTarget::ComponentGraph),
            "vue" => Ok(EmissionTarget::Template),
            _ => Err(format!(
                "unknown target '{}', expected 'elements', 'react' or 'vue'",
                s
            )),
        }
    }
}
