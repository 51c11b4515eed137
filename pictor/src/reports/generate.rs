use std::path::PathBuf;

use pictor_core::Diagnostics;
use pictor_ir::EmissionTarget;

use super::{
    output::{Output, Report},
    render_diagnostics,
};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub icon_count: usize,
    pub names: Vec<String>,
    pub targets: Vec<TargetSummary>,
    /// Rendered files when nothing was written.
    pub preview: Option<Vec<PreviewFile>>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug)]
pub struct TargetSummary {
    pub target: EmissionTarget,
    pub dir: PathBuf,
    /// Icon modules, not counting the index.
    pub modules: usize,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        if let Some(files) = &self.preview {
            for file in files {
                out.divider(&file.path);
                out.preformatted(&file.content);
            }
            out.divider("Summary");
            out.preformatted(&format!("{} files would be generated", files.len()));
            return;
        }

        out.key_value("Icons", &self.icon_count.to_string());
        for summary in &self.targets {
            out.added_item(&format!(
                "{}: wrote {} icon files and index to {}",
                summary.target,
                summary.modules,
                summary.dir.display()
            ));
        }
    }
}
