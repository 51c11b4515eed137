//! Generate operation - dist asset store to wrapper modules.

use std::path::Path;

use eyre::{Context, Result, bail};
use pictor_codegen::{EmitterOptions, for_target, js::is_identifier, write_files};
use pictor_core::{Diagnostic, Diagnostics, IconCatalog, export_name};
use pictor_ir::{EmissionTarget, Icon};
use pictor_svg::extract_root;

use crate::{
    ops::assets::{self, Asset},
    reports::{GenerateReport, PreviewFile, TargetSummary},
};

pub struct GenerateOptions<'a> {
    pub dist_dir: &'a Path,
    /// Root the per-target directories are created in.
    pub out_dir: &'a Path,
    pub targets: &'a [EmissionTarget],
    pub emitter: &'a EmitterOptions,
    /// Render without writing.
    pub dry_run: bool,
}

/// Load the dist store into a catalog.
///
/// Assets that cannot be read or parsed, or whose name cannot be emitted,
/// are left out and reported.
pub fn load_catalog(dist_dir: &Path, diagnostics: &mut Diagnostics) -> IconCatalog {
    let icons: Vec<Icon> = assets::scan(dist_dir, diagnostics)
        .into_iter()
        .filter_map(|asset| match load_icon(&asset) {
            Ok(icon) => Some(icon),
            Err(e) => {
                let message = format!("{:#}", e);
                tracing::warn!(path = %asset.path.display(), %message, "skipping asset");
                diagnostics.push(Diagnostic::warning("load", message).about(asset.key.to_string()));
                None
            }
        })
        .collect();

    let catalog = IconCatalog::from_icons(icons);
    for key in catalog.collisions() {
        diagnostics.push(
            Diagnostic::warning("catalog", "duplicate icon, the later asset wins")
                .about(key.to_string()),
        );
    }
    catalog
}

fn load_icon(asset: &Asset) -> Result<Icon> {
    let export = export_name(&asset.key);
    if !is_emittable_name(&asset.key.name) || !is_identifier(&export) {
        bail!(
            "'{}' is not a lowercase, hyphen-delimited icon name",
            asset.key.name
        );
    }

    let svg = std::fs::read_to_string(&asset.path)
        .wrap_err_with(|| format!("failed to read {}", asset.path.display()))?;
    let markup = extract_root(&svg)
        .wrap_err_with(|| format!("invalid SVG in {}", asset.path.display()))?;
    Ok(Icon::new(
        asset.key.clone(),
        export,
        markup.attributes,
        markup.inner,
    ))
}

/// Names end up in custom-element tags and file names.
fn is_emittable_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Generate wrappers for every requested target.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let mut diagnostics = Diagnostics::new();
    let catalog = load_catalog(opts.dist_dir, &mut diagnostics);

    let mut targets = Vec::new();
    let mut preview = Vec::new();
    for &target in opts.targets {
        let files = for_target(target, opts.emitter).emit(&catalog);

        if opts.dry_run {
            preview.extend(files.iter().map(|file| PreviewFile {
                path: file.relative_path().display().to_string(),
                content: file.content().to_string(),
            }));
        } else {
            write_files(&files, opts.out_dir)
                .wrap_err_with(|| format!("Failed to write {} modules", target))?;
        }

        targets.push(TargetSummary {
            target,
            dir: opts.out_dir.join(target.dir_name()),
            modules: catalog.len(),
        });
    }

    Ok(GenerateReport {
        icon_count: catalog.len(),
        names: catalog.name_index(),
        targets,
        preview: opts.dry_run.then_some(preview),
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16"><path d="M0"/></svg>"#;

    fn dist_with(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (path, content) in files {
            let path = temp.path().join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        temp
    }

    #[test]
    fn test_load_catalog_reports_parse_error_cause() {
        let dist = dist_with(&[("16/broken.svg", "<svg><path></svg>"), ("16/home.svg", ICON)]);
        let mut diagnostics = Diagnostics::new();

        let catalog = load_catalog(dist.path(), &mut diagnostics);

        assert_eq!(catalog.len(), 1);
        let warnings: Vec<String> = diagnostics.warnings().map(|d| d.to_string()).collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("16/broken: invalid SVG in "), "{}", warnings[0]);
        let (_, cause) = warnings[0]
            .split_once("failed to parse SVG document: ")
            .unwrap();
        assert!(!cause.is_empty());
    }

    #[test]
    fn test_load_catalog_skips_names_that_cannot_be_emitted() {
        let dist = dist_with(&[
            ("16/ArrowLeft.svg", ICON),
            ("16/a+b.svg", ICON),
            ("16/arrow-left.svg", ICON),
        ]);
        let mut diagnostics = Diagnostics::new();

        let catalog = load_catalog(dist.path(), &mut diagnostics);

        let keys: Vec<String> = catalog.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["16/arrow-left"]);
        let subjects: Vec<&str> = diagnostics
            .from_stage("load")
            .filter_map(|d| d.subject.as_deref())
            .collect();
        assert_eq!(subjects, vec!["16/ArrowLeft", "16/a+b"]);
    }

    #[test]
    fn test_emittable_names() {
        assert!(is_emittable_name("chevron-down"));
        assert!(is_emittable_name("h1"));
        assert!(!is_emittable_name("ArrowLeft"));
        assert!(!is_emittable_name("a+b"));
        assert!(!is_emittable_name("-left"));
    }
}
