//! Preview operation - one HTML page showing every optimized icon.

use std::path::Path;

use eyre::{Context, Result};
use pictor_codegen::render_preview;
use pictor_core::{Diagnostics, File};

use crate::{ops::load_catalog, reports::PreviewReport};

pub struct PreviewOptions<'a> {
    pub dist_dir: &'a Path,
    /// Page location, usually `<out>/preview/index.html`.
    pub out_file: &'a Path,
}

pub fn preview(opts: PreviewOptions) -> Result<PreviewReport> {
    let mut diagnostics = Diagnostics::new();
    let catalog = load_catalog(opts.dist_dir, &mut diagnostics);

    let html = render_preview(&catalog);
    File::new(opts.out_file, html)
        .write()
        .wrap_err_with(|| format!("failed to write {}", opts.out_file.display()))?;
    tracing::info!(path = %opts.out_file.display(), icons = catalog.len(), "wrote preview");

    Ok(PreviewReport {
        path: opts.out_file.to_path_buf(),
        icon_count: catalog.len(),
        sizes: catalog
            .by_size()
            .into_iter()
            .map(|(size, _)| size.to_string())
            .collect(),
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><rect width="4" height="4"/></svg>"#;

    #[test]
    fn test_writes_page_grouped_by_size() {
        let temp = tempfile::tempdir().unwrap();
        let dist = temp.path().join("dist");
        for path in ["24/home.svg", "16/home.svg", "16/trash.svg"] {
            let path = dist.join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, SQUARE).unwrap();
        }
        let out_file = temp.path().join("out/preview/index.html");

        let report = preview(PreviewOptions {
            dist_dir: &dist,
            out_file: &out_file,
        })
        .unwrap();

        assert_eq!(report.icon_count, 3);
        assert_eq!(report.sizes, vec!["16", "24"]);
        assert!(report.diagnostics.is_empty());

        let html = fs::read_to_string(&out_file).unwrap();
        assert!(html.starts_with("<!doctype html>\n"));
        let sixteen = html.find("<h2>16px (2)</h2>").unwrap();
        let twenty_four = html.find("<h2>24px (1)</h2>").unwrap();
        assert!(sixteen < twenty_four);
        assert!(html.contains("<span>trash</span>"));
        assert!(html.contains(r#"<rect width="4" height="4"/>"#));
    }

    #[test]
    fn test_empty_store_still_writes_page() {
        let temp = tempfile::tempdir().unwrap();
        let out_file = temp.path().join("preview/index.html");

        let report = preview(PreviewOptions {
            dist_dir: &temp.path().join("missing"),
            out_file: &out_file,
        })
        .unwrap();

        assert_eq!(report.icon_count, 0);
        assert!(report.sizes.is_empty());
        assert!(fs::read_to_string(&out_file).unwrap().contains("<title>Icons (0)</title>"));
    }
}
