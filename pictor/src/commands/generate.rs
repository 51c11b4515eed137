use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pictor_codegen::EmitterOptions;
use pictor_ir::EmissionTarget;
use pictor_manifest::PictorToml;

use super::print_report;
use crate::ops::{self, GenerateOptions};

#[derive(Args)]
pub struct GenerateCommand {
    /// Target to generate (repeatable; defaults to the configured targets)
    #[arg(short, long = "target", value_name = "TARGET")]
    pub targets: Vec<EmissionTarget>,

    /// Output root (overrides paths.out)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self, pictor_toml: &PictorToml) -> Result<()> {
        let config = pictor_toml.config();
        let targets = if self.targets.is_empty() {
            config.generate.targets.clone()
        } else {
            self.targets.clone()
        };
        let out_dir = match &self.output {
            Some(output) => output.clone(),
            None => pictor_toml.resolve(&config.paths.out),
        };
        let dist_dir = pictor_toml.resolve(&config.paths.dist);
        let emitter = EmitterOptions {
            element_prefix: config.generate.element_prefix.clone(),
        };

        let report = ops::generate(GenerateOptions {
            dist_dir: &dist_dir,
            out_dir: &out_dir,
            targets: &targets,
            emitter: &emitter,
            dry_run: self.dry_run,
        })?;

        print_report(&report);
        Ok(())
    }
}
