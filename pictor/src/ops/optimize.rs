//! Optimize operation - raw asset store to dist asset store.

use std::path::Path;

use eyre::{Context, Result};
use pictor_core::{Diagnostic, Diagnostics, File};
use pictor_svg::Optimizer;
use rayon::prelude::*;

use crate::{
    ops::assets::{self, Asset},
    reports::{OptimizeReport, OptimizedAsset},
};

pub struct OptimizeOptions<'a> {
    pub raw_dir: &'a Path,
    pub dist_dir: &'a Path,
    pub optimizer: &'a Optimizer,
}

/// Optimize every raw asset into the dist store.
///
/// Unreadable or malformed assets are skipped and reported; the others are
/// still written.
pub fn optimize(opts: OptimizeOptions) -> Result<OptimizeReport> {
    let mut diagnostics = Diagnostics::new();
    let sources = assets::scan(opts.raw_dir, &mut diagnostics);

    let results: Vec<(Asset, Result<OptimizedAsset>)> = sources
        .into_par_iter()
        .map(|asset| {
            let result = optimize_one(&asset, &opts);
            (asset, result)
        })
        .collect();

    let mut optimized = Vec::new();
    for (asset, result) in results {
        match result {
            Ok(file) => optimized.push(file),
            Err(e) => {
                let message = format!("{:#}", e);
                tracing::warn!(path = %asset.path.display(), %message, "optimize failed");
                diagnostics.push(
                    Diagnostic::warning("optimize", message).about(asset.key.to_string()),
                );
            }
        }
    }

    Ok(OptimizeReport {
        dist_dir: opts.dist_dir.to_path_buf(),
        assets: optimized,
        diagnostics,
    })
}

fn optimize_one(asset: &Asset, opts: &OptimizeOptions) -> Result<OptimizedAsset> {
    let svg = std::fs::read_to_string(&asset.path)
        .wrap_err_with(|| format!("failed to read {}", asset.path.display()))?;
    let optimized = opts
        .optimizer
        .optimize(&svg)
        .wrap_err_with(|| format!("invalid SVG in {}", asset.path.display()))?;

    File::new(assets::asset_path(opts.dist_dir, &asset.key), optimized.data.as_str()).write()?;

    Ok(OptimizedAsset {
        key: asset.key.clone(),
        original_bytes: optimized.original_bytes,
        optimized_bytes: optimized.optimized_bytes(),
    })
}
