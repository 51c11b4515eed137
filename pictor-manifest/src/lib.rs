//! `pictor.toml` parsing and validation.
//!
//! ```
//! use pictor_manifest::Config;
//!
//! let config: Config = "[figma]\nfile_key = \"abc\"\n".parse().unwrap();
//! assert_eq!(config.figma.concurrency, 8);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod template;
mod validate;

pub use config::{ColorsConfig, Config, FigmaConfig, GenerateConfig, PathsConfig};
pub use error::{Error, Result, SourceContext};
pub use file::{CONFIG_FILE_NAME, PictorToml};
pub use template::default_config;
