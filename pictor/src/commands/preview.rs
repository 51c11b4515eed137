use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pictor_codegen::PREVIEW_PATH;
use pictor_manifest::PictorToml;

use super::print_report;
use crate::ops::{self, PreviewOptions};

#[derive(Args)]
pub struct PreviewCommand {
    /// Page to write (defaults to preview/index.html under paths.out)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl PreviewCommand {
    pub fn run(&self, pictor_toml: &PictorToml) -> Result<()> {
        let config = pictor_toml.config();
        let out_file = match &self.output {
            Some(output) => output.clone(),
            None => pictor_toml.resolve(&config.paths.out).join(PREVIEW_PATH),
        };
        let dist_dir = pictor_toml.resolve(&config.paths.dist);

        let report = ops::preview(PreviewOptions {
            dist_dir: &dist_dir,
            out_file: &out_file,
        })?;

        print_report(&report);
        Ok(())
    }
}
