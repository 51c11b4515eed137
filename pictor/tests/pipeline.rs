//! End-to-end run of import, optimize and generate against an in-memory design file.

use std::{collections::BTreeMap, fs, path::Path};

use pictor::ops::{self, GenerateOptions, ImportOptions, OptimizeOptions};
use pictor_codegen::EmitterOptions;
use pictor_figma::{DesignSource, Error, ImageUrls, Result};
use pictor_ir::{EmissionTarget, RawComponent};
use pictor_svg::Optimizer;
use tempfile::TempDir;

const HOME: &str = r##"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16">
  <!-- exported -->
  <path fill="#71717A" d="M2 8 8 2l6 6"/>
</svg>"##;

const CHEVRON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none"><path stroke="#000" d="m6 9 6 6 6-6"/></svg>"##;

struct FakeDesign {
    components: Vec<RawComponent>,
    svgs: BTreeMap<String, String>,
}

impl FakeDesign {
    fn new() -> Self {
        let components = vec![
            RawComponent::new("1:1", "16/home"),
            RawComponent::new("1:2", "Size=24").in_frame("Chevron Down"),
            RawComponent::new("1:3", "Cover"),
            RawComponent::new("1:4", "24/trash"),
            RawComponent::new("1:5", "Size=16").in_frame("Usage 2"),
        ];
        let svgs = BTreeMap::from([
            ("mem://1:1".to_string(), HOME.to_string()),
            ("mem://1:2".to_string(), CHEVRON.to_string()),
        ]);
        Self { components, svgs }
    }
}

impl DesignSource for FakeDesign {
    fn components(&self) -> Result<Vec<RawComponent>> {
        Ok(self.components.clone())
    }

    fn image_urls(&self, ids: &[String]) -> Result<ImageUrls> {
        Ok(ids.iter().map(|id| (id.clone(), format!("mem://{}", id))).collect())
    }

    fn download(&self, url: &str) -> Result<String> {
        self.svgs.get(url).cloned().ok_or_else(|| Error::Api {
            status: 404,
            message: format!("nothing at {}", url),
        })
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

#[test]
fn test_import_optimize_generate() {
    let temp = TempDir::new().unwrap();
    let raw = temp.path().join("raw");
    let dist = temp.path().join("dist");
    let out = temp.path().join("out");

    // An icon imported earlier that the design file no longer has.
    fs::create_dir_all(raw.join("32")).unwrap();
    fs::write(raw.join("32/legacy.svg"), CHEVRON).unwrap();
    fs::write(raw.join("notes.txt"), "").unwrap();

    let import = ops::import(
        &FakeDesign::new(),
        ImportOptions {
            raw_dir: &raw,
            concurrency: 2,
        },
    )
    .unwrap();

    assert_eq!(import.component_count, 5);
    let rejected: Vec<&str> = import.rejected.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(rejected, vec!["Cover", "Usage 2"]);
    assert_eq!(import.names, vec!["chevron-down", "home", "trash"]);

    let downloaded: Vec<String> = import.downloaded.iter().map(|k| k.to_string()).collect();
    assert_eq!(downloaded, vec!["16/home", "24/chevron-down"]);
    assert_eq!(import.failed_count(), 1);

    let missing: Vec<String> = import.missing.iter().map(|k| k.to_string()).collect();
    assert_eq!(missing, vec!["32/legacy"]);
    assert_eq!(import.diagnostics.from_stage("scan").count(), 1);

    assert_eq!(read(&raw.join("16/home.svg")), HOME);
    assert!(!raw.join("24/trash.svg").exists());

    let optimizer = Optimizer::new(pictor_svg::OptimizeOptions::default());
    let optimized = ops::optimize(OptimizeOptions {
        raw_dir: &raw,
        dist_dir: &dist,
        optimizer: &optimizer,
    })
    .unwrap();

    assert_eq!(optimized.assets.len(), 3);
    assert_eq!(optimized.diagnostics.warning_count(), 0);
    let home = read(&dist.join("16/home.svg"));
    assert!(home.contains("currentColor"));
    assert!(!home.contains("exported"));
    assert!(optimized.optimized_bytes() < optimized.original_bytes());

    let generated = ops::generate(GenerateOptions {
        dist_dir: &dist,
        out_dir: &out,
        targets: &[EmissionTarget::ComponentGraph, EmissionTarget::Template],
        emitter: &EmitterOptions::default(),
        dry_run: false,
    })
    .unwrap();

    assert_eq!(generated.icon_count, 3);
    assert_eq!(generated.names, vec!["chevron-down", "home", "legacy"]);
    assert_eq!(generated.targets.len(), 2);
    assert!(generated.preview.is_none());

    assert_eq!(
        read(&out.join("react/index.js")),
        "export * from './home-16.js'\nexport * from './chevron-down-24.js'\nexport * from './legacy-32.js'\n"
    );
    let module = read(&out.join("vue/home-16.js"));
    assert!(module.starts_with("import { h } from 'vue'"));
    assert!(module.contains("currentColor"));
    assert!(!out.join("elements").exists());
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let dist = temp.path().join("dist");
    let out = temp.path().join("out");
    fs::create_dir_all(dist.join("24")).unwrap();
    fs::write(dist.join("24/chevron-down.svg"), CHEVRON).unwrap();

    let report = ops::generate(GenerateOptions {
        dist_dir: &dist,
        out_dir: &out,
        targets: &[EmissionTarget::WebComponent],
        emitter: &EmitterOptions::default(),
        dry_run: true,
    })
    .unwrap();

    let paths: Vec<&str> = report
        .preview
        .as_ref()
        .unwrap()
        .iter()
        .map(|file| file.path.as_str())
        .collect();
    assert_eq!(paths, vec!["elements/chevron-down-24.js", "elements/index.js"]);
    assert!(!out.exists());
}

#[test]
fn test_list_reports_sizes() {
    let temp = TempDir::new().unwrap();
    for (size, name) in [("16", "home"), ("24", "home"), ("24", "trash")] {
        fs::create_dir_all(temp.path().join(size)).unwrap();
        fs::write(temp.path().join(size).join(format!("{}.svg", name)), CHEVRON).unwrap();
    }

    let report = ops::list(temp.path());

    assert_eq!(report.names, vec!["home", "trash"]);
    assert_eq!(
        report.sizes,
        vec![("16".to_string(), 1), ("24".to_string(), 2)]
    );
}
