use std::path::Path;

use clap::Args;
use eyre::{Context, Result};
use pictor_core::{File, FileRules, WriteResult};
use pictor_manifest::default_config;

#[derive(Args)]
pub struct InitCommand {
    /// Figma file key written into the new config
    #[arg(long)]
    pub file_key: Option<String>,
}

impl InitCommand {
    pub fn run(&self, config_path: &Path) -> Result<()> {
        let content = default_config(self.file_key.as_deref());
        let result = File::new(config_path, content)
            .with_rules(FileRules::create_once())
            .write()
            .wrap_err("Failed to write config file")?;

        match result {
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", config_path.display());
            }
            _ => {
                println!("Created {}", config_path.display());
                if self.file_key.is_none() {
                    println!("Set figma.file_key before running `pictor import`");
                }
            }
        }
        Ok(())
    }
}
