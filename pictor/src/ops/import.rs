//! Import operation - design file to raw asset store.

use std::path::Path;

use eyre::{Context, Result};
use indexmap::IndexMap;
use pictor_core::{
    ComponentFilter, Diagnostic, Diagnostics, File, FlatKeys, NameKeyParser, ParsedKey,
    Unparseable, build_name_index, detect_missing,
};
use pictor_figma::DesignSource;
use pictor_ir::IconKey;
use rayon::prelude::*;

use crate::{ops::assets, reports::ImportReport};

pub struct ImportOptions<'a> {
    /// Raw asset store downloads are written to.
    pub raw_dir: &'a Path,
    /// Parallel downloads.
    pub concurrency: usize,
}

/// Fetch, filter and download every icon component of `source`.
///
/// Failing to list components or image URLs aborts the import; a failed
/// download only loses that icon.
pub fn import(source: &dyn DesignSource, opts: ImportOptions) -> Result<ImportReport> {
    let mut diagnostics = Diagnostics::new();

    // Snapshot before downloading, so missing-upstream detection only sees
    // what was there already.
    let local: Vec<IconKey> = assets::scan(opts.raw_dir, &mut diagnostics)
        .into_iter()
        .map(|asset| asset.key)
        .collect();

    let components = source
        .components()
        .wrap_err("Failed to load design components")?;
    let outcome = ComponentFilter::new().partition(&components);
    for (label, reason) in &outcome.rejected {
        diagnostics.push(Diagnostic::info("filter", reason.to_string()).about(label.clone()));
    }

    let icons = parse_identifiers(&outcome.accepted, &mut diagnostics);
    let remote: Vec<IconKey> = icons.keys().cloned().collect();
    let names = build_name_index(&remote);

    let ids: Vec<String> = icons.values().cloned().collect();
    let urls = source
        .image_urls(&ids)
        .wrap_err("Failed to get icon download URLs")?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opts.concurrency.max(1))
        .build()
        .wrap_err("Failed to start download pool")?;
    let jobs: Vec<(&IconKey, &String)> = icons.iter().collect();
    let results: Vec<(IconKey, Result<()>)> = pool.install(|| {
        jobs.into_par_iter()
            .map(|(key, id)| {
                let result = match urls.get(id) {
                    Some(url) => download(source, url, &assets::asset_path(opts.raw_dir, key)),
                    None => Err(eyre::eyre!("no download URL returned")),
                };
                (key.clone(), result)
            })
            .collect()
    });

    let mut downloaded = Vec::new();
    for (key, result) in results {
        match result {
            Ok(()) => downloaded.push(key),
            Err(e) => {
                let message = format!("{:#}", e);
                tracing::warn!(%key, %message, "download failed");
                diagnostics.push(Diagnostic::warning("download", message).about(key.to_string()));
            }
        }
    }

    let missing = detect_missing(&local, &remote);
    for key in &missing {
        tracing::warn!(%key, "present locally but no longer in the design file");
    }

    Ok(ImportReport {
        component_count: components.len(),
        rejected: outcome.rejected,
        names,
        downloaded,
        missing,
        diagnostics,
    })
}

/// Map accepted `(node id, identifier)` pairs to keys.
///
/// Two components resolving to the same key keep the later node id at the
/// earlier position.
fn parse_identifiers(
    accepted: &[(String, String)],
    diagnostics: &mut Diagnostics,
) -> IndexMap<IconKey, String> {
    let mut icons = IndexMap::new();
    for (id, identifier) in accepted {
        match FlatKeys.parse(identifier) {
            ParsedKey::Parsed(key) => {
                if icons.insert(key.clone(), id.clone()).is_some() {
                    diagnostics.push(
                        Diagnostic::warning("import", "several components share this icon key")
                            .about(key.to_string()),
                    );
                }
            }
            ParsedKey::Unparseable(Unparseable::EmptyName) => {
                tracing::debug!(%identifier, "dropping component without a name");
            }
            ParsedKey::Unparseable(reason) => {
                diagnostics.push(Diagnostic::info("parse", reason.to_string()).about(identifier.clone()));
            }
        }
    }
    icons
}

fn download(source: &dyn DesignSource, url: &str, path: &Path) -> Result<()> {
    let svg = source
        .download(url)
        .wrap_err_with(|| format!("failed to download {}", url))?;
    File::new(path, svg).write()?;
    Ok(())
}
