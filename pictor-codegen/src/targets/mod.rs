//! Emitters for each supported UI ecosystem.

mod elements;
mod react;
mod vue;

pub use elements::{DEFAULT_ELEMENT_PREFIX, ElementsEmitter};
pub use react::ReactEmitter;
pub use vue::VueEmitter;

use pictor_ir::{EmissionTarget, Icon};

use crate::{TargetEmitter, ast::ObjectLiteral};

/// Settings shared by all emitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterOptions {
    /// Custom-element tag prefix; tags are `<prefix>-<name><size>`.
    pub element_prefix: String,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            element_prefix: DEFAULT_ELEMENT_PREFIX.to_string(),
        }
    }
}

/// The emitter for `target`.
pub fn for_target(target: EmissionTarget, options: &EmitterOptions) -> Box<dyn TargetEmitter> {
    match target {
        EmissionTarget::WebComponent => Box::new(ElementsEmitter::new(&options.element_prefix)),
        EmissionTarget::ComponentGraph => Box::new(ReactEmitter),
        EmissionTarget::Template => Box::new(VueEmitter),
    }
}

/// Root `<svg>` attributes of `icon` as an object literal.
fn attribute_object(icon: &Icon) -> ObjectLiteral {
    icon.attributes
        .iter()
        .fold(ObjectLiteral::new(), |obj, attr| obj.string(&attr.name, &attr.value))
}
