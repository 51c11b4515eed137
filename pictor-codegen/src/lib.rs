//! Wrapper module generation for pictor icons.
//!
//! Every [`EmissionTarget`](pictor_ir::EmissionTarget) has a
//! [`TargetEmitter`] that turns an [`IconCatalog`](pictor_core::IconCatalog)
//! into one module per icon plus an `index.js`. Modules are assembled as
//! [`ModuleFile`]s from the builders in [`ast`] and rendered through the
//! shared [`builder::CodeBuilder`], so output is byte-identical for identical
//! input. [`render_preview`] draws the whole catalog as one HTML page.

pub mod ast;
pub mod builder;
pub mod js;

mod emitter;
mod module_file;
mod preview;
mod targets;

pub use emitter::{EmittedFile, TargetEmitter, write_files};
pub use module_file::ModuleFile;
pub use preview::{PREVIEW_PATH, render_preview};
pub use targets::{
    DEFAULT_ELEMENT_PREFIX, ElementsEmitter, EmitterOptions, ReactEmitter, VueEmitter, for_target,
};
