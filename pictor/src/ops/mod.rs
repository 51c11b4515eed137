//! Pipeline operations.
//!
//! Each operation takes resolved paths and collaborators, does its work and
//! returns a report; none of them print.

pub mod assets;
pub mod generate;
pub mod import;
pub mod list;
pub mod optimize;
pub mod preview;

pub use generate::{GenerateOptions, generate, load_catalog};
pub use import::{ImportOptions, import};
pub use list::list;
pub use optimize::{OptimizeOptions, optimize};
pub use preview::{PreviewOptions, preview};
