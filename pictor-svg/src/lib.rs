//! SVG handling for the pictor icon pipeline.
//!
//! This is deliberately not a general SVG library. It knows how to:
//!
//! - split an icon document into root attributes and inner markup ([`extract_root`])
//! - map brand-palette colors to `currentColor` ([`ColorRewriteRule`])
//! - normalize downloaded icons before code generation ([`Optimizer`])
//!
//! Parsing is done by [roxmltree](https://docs.rs/roxmltree), serialization by
//! [xmlwriter](https://docs.rs/xmlwriter) without indentation.

mod color;
mod error;
mod markup;
mod optimize;
mod serialize;

pub use color::{COLOR_ATTRIBUTES, CURRENT_COLOR, ColorRewriteRule, DEFAULT_PALETTE};
pub use error::{Error, Result};
pub use markup::{SvgMarkup, extract_root};
pub use optimize::{OptimizeOptions, Optimized, Optimizer};
