//! Icon data types for the pictor pipeline.
//!
//! These types are the hand-off points between the pipeline stages:
//!
//! ```text
//! design tool → RawComponent → IconKey → Icon → emitted module text
//! ```
//!
//! They carry no behavior beyond construction, ordering and display. Parsing
//! and classification live in `pictor-core`, markup handling in `pictor-svg`.

mod component;
mod icon;
mod key;
mod target;

pub use component::RawComponent;
pub use icon::{Icon, SvgAttribute};
pub use key::{IconKey, InvalidSize, SizeToken};
pub use target::EmissionTarget;
