use std::path::PathBuf;

use pictor_core::Diagnostics;

use super::{
    output::{Output, Report},
    render_diagnostics,
};

/// Report data for `pictor preview`.
#[derive(Debug)]
pub struct PreviewReport {
    pub path: PathBuf,
    pub icon_count: usize,
    /// Sizes in page order.
    pub sizes: Vec<String>,
    pub diagnostics: Diagnostics,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        out.key_value("Icons", &self.icon_count.to_string());
        if !self.sizes.is_empty() {
            out.key_value("Sizes", &self.sizes.join(", "));
        }
        out.added_item(&format!("wrote {}", self.path.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = PreviewReport {
            path: PathBuf::from("out/preview/index.html"),
            icon_count: 3,
            sizes: vec!["16".into(), "24".into()],
            diagnostics: Diagnostics::new(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Icons: 3",
                "Sizes: 16, 24",
                "  + wrote out/preview/index.html",
            ]
        );
    }
}
