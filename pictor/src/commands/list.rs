use clap::Args;
use eyre::Result;
use pictor_manifest::PictorToml;

use super::print_report;
use crate::ops;

#[derive(Args)]
pub struct ListCommand;

impl ListCommand {
    pub fn run(&self, pictor_toml: &PictorToml) -> Result<()> {
        let config = pictor_toml.config();
        let report = ops::list(&pictor_toml.resolve(&config.paths.dist));
        print_report(&report);
        Ok(())
    }
}
