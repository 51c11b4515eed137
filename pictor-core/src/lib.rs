//! Core classification and bookkeeping for the pictor icon pipeline.
//!
//! - [`name_key`] turns file paths and design-tool identifiers into [`IconKey`]s
//! - [`filter`] decides which design-tool components are icons at all
//! - [`catalog`] deduplicates icons and derives the reporting views
//! - [`diagnostic`] collects the non-fatal findings of a run
//!
//! [`IconKey`]: pictor_ir::IconKey

pub mod catalog;
pub mod diagnostic;
pub mod filter;
pub mod name_key;

mod file;
mod utils;

pub use catalog::{IconCatalog, build_name_index, detect_missing};
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
pub use filter::{ComponentFilter, FilterDecision, FilterOutcome, RejectReason};
pub use name_key::{FlatKeys, NameKeyParser, ParsedKey, PathKeys, Unparseable, export_name};
pub use utils::{contains_digit, slugify, to_pascal_case};
