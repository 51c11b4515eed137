use clap::Args;
use eyre::Result;
use nanoid::nanoid;
use pictor_manifest::PictorToml;
use pictor_svg::{ColorRewriteRule, Optimizer};

use super::print_report;
use crate::ops::{self, OptimizeOptions};

/// Id prefixes must start a valid XML name.
const ID_ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

#[derive(Args)]
pub struct OptimizeCommand {
    /// Prefix for element ids (random per run by default)
    #[arg(long)]
    pub prefix: Option<String>,
}

impl OptimizeCommand {
    pub fn run(&self, pictor_toml: &PictorToml) -> Result<()> {
        let config = pictor_toml.config();
        let colors = match config.palette() {
            Some(palette) => ColorRewriteRule::new(palette),
            None => ColorRewriteRule::default(),
        };
        let id_prefix = self
            .prefix
            .clone()
            .unwrap_or_else(|| nanoid!(5, &ID_ALPHABET));

        let optimizer = Optimizer::new(pictor_svg::OptimizeOptions {
            colors,
            sort_attributes: true,
            id_prefix: Some(id_prefix),
        });

        let raw_dir = pictor_toml.resolve(&config.paths.raw);
        let dist_dir = pictor_toml.resolve(&config.paths.dist);
        let report = ops::optimize(OptimizeOptions {
            raw_dir: &raw_dir,
            dist_dir: &dist_dir,
            optimizer: &optimizer,
        })?;

        print_report(&report);
        Ok(())
    }
}
