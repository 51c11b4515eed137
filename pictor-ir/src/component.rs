//! Design-tool component records.

use serde::{Deserialize, Serialize};

/// A component node as listed by the design tool.
///
/// Consumed once per import run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComponent {
    /// Node id used to request the rendered SVG.
    pub id: String,
    pub name: String,
    /// Label of the frame grouping size variants, if any.
    #[serde(default)]
    pub containing_frame_name: Option<String>,
}

impl RawComponent {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            containing_frame_name: None,
        }
    }

    /// Attach the containing frame label.
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        self.containing_frame_name = Some(frame.into());
        self
    }

    /// Frame label, treating an empty label as no frame.
    pub fn frame(&self) -> Option<&str> {
        self.containing_frame_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame_is_no_frame() {
        let comp = RawComponent::new("1:2", "16/home").in_frame("");
        assert_eq!(comp.frame(), None);

        let comp = RawComponent::new("1:3", "Size=16").in_frame("Home");
        assert_eq!(comp.frame(), Some("Home"));
    }
}
