//! Structured JavaScript module generation.

use crate::{
    ast::{Export, Import},
    builder::{CodeBuilder, CodeFragment, Renderable},
};

/// A JavaScript module as imports, declarations and exports.
///
/// Sections are rendered in that order, separated by one blank line, with a
/// blank line between consecutive declarations.
///
/// ```
/// use pictor_codegen::{ModuleFile, ast::{Const, Export, Import}};
///
/// let code = ModuleFile::new()
///     .import(Import::new("react").default("React"))
///     .declare(Const::new("size", "16").private())
///     .export(Export::new().named("size"))
///     .render();
///
/// assert_eq!(
///     code,
///     "import React from 'react';\n\nconst size = 16;\n\nexport { size };\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleFile {
    imports: Vec<Import>,
    declarations: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl ModuleFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn declare<R: Renderable>(mut self, node: R) -> Self {
        self.declarations.push(node.to_fragments());
        self
    }

    /// Add a declaration given directly as fragments.
    pub fn declare_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.declarations.push(fragments);
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    pub fn exports(mut self, exports: impl IntoIterator<Item = Export>) -> Self {
        self.exports.extend(exports);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.declarations.is_empty() && self.exports.is_empty()
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        for import in &self.imports {
            builder.emit(import);
        }
        if !self.imports.is_empty() && (!self.declarations.is_empty() || !self.exports.is_empty()) {
            builder.blank();
        }

        for (i, fragments) in self.declarations.iter().enumerate() {
            if i > 0 {
                builder.blank();
            }
            for fragment in fragments {
                builder.fragment(fragment);
            }
        }
        if !self.declarations.is_empty() && !self.exports.is_empty() {
            builder.blank();
        }

        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }
}
