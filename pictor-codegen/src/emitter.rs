//! The per-target emission seam.

use std::path::{Path, PathBuf};

use eyre::Result;
use pictor_core::{GeneratedFile, IconCatalog};
use pictor_ir::{EmissionTarget, Icon};

use crate::ModuleFile;

/// Generates wrapper modules for one [`EmissionTarget`].
///
/// Implementations only describe the module text. File naming, ordering and
/// the index module are shared, so every target lays out its output the same
/// way.
pub trait TargetEmitter {
    fn target(&self) -> EmissionTarget;

    /// File name of the module wrapping `icon`, e.g. `chevron-down-16.js`.
    fn module_file_name(&self, icon: &Icon) -> String {
        format!("{}.{}", icon.key.file_stem(), self.target().extension())
    }

    /// The wrapper module for one icon.
    fn module(&self, icon: &Icon) -> ModuleFile;

    /// The index module re-exporting `icons` in the given order.
    fn index(&self, icons: &[&Icon]) -> ModuleFile;

    fn render_module(&self, icon: &Icon) -> String {
        self.module(icon).render()
    }

    fn render_index(&self, icons: &[&Icon]) -> String {
        self.index(icons).render()
    }

    /// One module per catalog icon in catalog order, then `index.js`.
    fn emit(&self, catalog: &IconCatalog) -> Vec<EmittedFile> {
        let dir = Path::new(self.target().dir_name());
        let icons: Vec<&Icon> = catalog.icons().collect();

        let mut files: Vec<EmittedFile> = icons
            .iter()
            .map(|icon| {
                EmittedFile::new(
                    self.target(),
                    dir.join(self.module_file_name(icon)),
                    self.render_module(icon),
                )
            })
            .collect();
        files.push(EmittedFile::new(
            self.target(),
            dir.join(format!("index.{}", self.target().extension())),
            self.render_index(&icons),
        ));

        tracing::debug!(target = %self.target(), files = files.len(), "emitted modules");
        files
    }
}

/// A rendered module and where it goes, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    target: EmissionTarget,
    relative_path: PathBuf,
    content: String,
}

impl EmittedFile {
    pub fn new(
        target: EmissionTarget,
        relative_path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            target,
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    pub fn target(&self) -> EmissionTarget {
        self.target
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for EmittedFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.relative_path)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Write every file below `base`, returning how many were written.
pub fn write_files(files: &[EmittedFile], base: &Path) -> Result<usize> {
    files.iter().try_fold(0, |written, file| {
        file.write(base)?;
        Ok(written + 1)
    })
}
