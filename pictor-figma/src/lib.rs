//! Access to the design file icons are imported from.
//!
//! [`DesignSource`] is the seam the import pipeline works against;
//! [`FigmaClient`] implements it over the Figma REST API.

mod client;
mod error;
mod source;
mod token;
mod wire;

pub use client::{DEFAULT_BASE_URL, FigmaClient};
pub use error::{Error, Result};
pub use source::{DesignSource, ImageUrls};
pub use token::TokenStore;
