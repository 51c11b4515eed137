//! Indentation-aware text building.

mod code_builder;
mod fragment;

pub use code_builder::{CodeBuilder, JS_INDENT};
pub use fragment::{CodeFragment, Renderable};
