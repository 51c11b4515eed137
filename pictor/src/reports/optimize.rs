use std::path::PathBuf;

use pictor_core::Diagnostics;
use pictor_ir::IconKey;

use super::{
    output::{Output, Report},
    render_diagnostics,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedAsset {
    pub key: IconKey,
    pub original_bytes: usize,
    pub optimized_bytes: usize,
}

/// Report data from an optimize run.
#[derive(Debug)]
pub struct OptimizeReport {
    pub dist_dir: PathBuf,
    pub assets: Vec<OptimizedAsset>,
    pub diagnostics: Diagnostics,
}

impl OptimizeReport {
    pub fn original_bytes(&self) -> usize {
        self.assets.iter().map(|a| a.original_bytes).sum()
    }

    pub fn optimized_bytes(&self) -> usize {
        self.assets.iter().map(|a| a.optimized_bytes).sum()
    }
}

fn kib(bytes: usize) -> String {
    format!("{:.2} KiB", bytes as f64 / 1024.0)
}

fn percent_saved(before: usize, after: usize) -> String {
    if before == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", 100.0 - (after as f64 * 100.0) / before as f64)
}

impl Report for OptimizeReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        for asset in &self.assets {
            out.added_item(&format!(
                "{}: {} -> {} ({})",
                asset.key,
                kib(asset.original_bytes),
                kib(asset.optimized_bytes),
                percent_saved(asset.original_bytes, asset.optimized_bytes)
            ));
        }
        out.newline();
        out.key_value("Optimized", &format!("{} icons into {}", self.assets.len(), self.dist_dir.display()));
        out.key_value(
            "Total",
            &format!(
                "{} -> {} ({} saved)",
                kib(self.original_bytes()),
                kib(self.optimized_bytes()),
                percent_saved(self.original_bytes(), self.optimized_bytes())
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_formatting() {
        assert_eq!(kib(1536), "1.50 KiB");
        assert_eq!(percent_saved(2000, 1500), "25.0%");
        assert_eq!(percent_saved(0, 0), "0.0%");
    }
}
