use pictor_core::{Diagnostics, RejectReason};
use pictor_ir::IconKey;

use super::{
    output::{Output, Report},
    render_diagnostics,
};

/// Report data from an import run.
#[derive(Debug)]
pub struct ImportReport {
    /// Components listed by the design file.
    pub component_count: usize,
    /// Skipped components as `(label, reason)`.
    pub rejected: Vec<(String, RejectReason)>,
    /// Sorted, deduplicated icon names.
    pub names: Vec<String>,
    pub downloaded: Vec<IconKey>,
    /// Local icons the design file no longer has.
    pub missing: Vec<IconKey>,
    pub diagnostics: Diagnostics,
}

impl ImportReport {
    pub fn failed_count(&self) -> usize {
        self.diagnostics.from_stage("download").count()
    }
}

impl Report for ImportReport {
    fn render(&self, out: &mut dyn Output) {
        for (label, reason) in &self.rejected {
            out.info(&format!("discarded '{}': {}", label, reason));
        }
        render_diagnostics(out, &self.diagnostics);

        out.key_value("Components", &self.component_count.to_string());
        out.key_value("Discarded", &self.rejected.len().to_string());
        out.key_value("Icon names", &self.names.len().to_string());
        out.key_value(
            "Downloaded",
            &format!("{} ({} failed)", self.downloaded.len(), self.failed_count()),
        );

        if !self.missing.is_empty() {
            out.newline();
            out.section("Missing from the design file");
            for key in &self.missing {
                out.list_item(&key.to_string());
            }
        }
    }
}
