//! The `<root>/<size>/<name>.svg` asset stores.

use std::path::{Path, PathBuf};

use pictor_core::{Diagnostic, Diagnostics, NameKeyParser, ParsedKey, PathKeys};
use pictor_ir::IconKey;
use walkdir::WalkDir;

/// One SVG file in an asset store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub key: IconKey,
    pub path: PathBuf,
}

/// Path of `key` below `root`.
pub fn asset_path(root: &Path, key: &IconKey) -> PathBuf {
    root.join(key.size.as_str())
        .join(format!("{}.svg", key.name))
}

/// Every parseable asset below `root`, in sorted path order.
///
/// A missing root is an empty store. Files that do not follow the layout are
/// skipped and recorded.
pub fn scan(root: &Path, diagnostics: &mut Diagnostics) -> Vec<Asset> {
    if !root.exists() {
        tracing::debug!(root = %root.display(), "asset store does not exist yet");
        return Vec::new();
    }

    let mut assets = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                diagnostics.push(Diagnostic::warning("scan", e.to_string()));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        match PathKeys.parse(&relative.to_string_lossy()) {
            ParsedKey::Parsed(key) => assets.push(Asset {
                key,
                path: entry.path().to_path_buf(),
            }),
            ParsedKey::Unparseable(reason) => {
                tracing::debug!(path = %relative.display(), %reason, "skipping file");
                diagnostics.push(
                    Diagnostic::info("scan", reason.to_string())
                        .about(relative.display().to_string()),
                );
            }
        }
    }
    assets
}
