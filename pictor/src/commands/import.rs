use clap::Args;
use dialoguer::{Confirm, Password, theme::ColorfulTheme};
use eyre::{Context, Result};
use pictor_figma::{FigmaClient, TokenStore};
use pictor_manifest::PictorToml;

use super::print_report;
use crate::ops::{self, ImportOptions};

#[derive(Args)]
pub struct ImportCommand {
    /// Figma personal access token
    #[arg(long, env = "FIGMA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl ImportCommand {
    pub fn run(&self, pictor_toml: &PictorToml) -> Result<()> {
        let config = pictor_toml.config();
        let store = TokenStore::new(pictor_toml.resolve(&config.figma.token_path));
        let token = self.resolve_token(&store)?;

        let client = FigmaClient::new(&config.figma.file_key, token)
            .wrap_err("Failed to create Figma client")?;
        let raw_dir = pictor_toml.resolve(&config.paths.raw);

        tracing::info!(file_key = %client.file_key(), raw = %raw_dir.display(), "importing");
        let report = ops::import(
            &client,
            ImportOptions {
                raw_dir: &raw_dir,
                concurrency: config.figma.concurrency,
            },
        )?;

        print_report(&report);
        Ok(())
    }

    fn resolve_token(&self, store: &TokenStore) -> Result<String> {
        if let Some(token) = &self.token {
            return Ok(token.trim().to_string());
        }
        if let Some(token) = store.read().wrap_err("Failed to read token file")? {
            return Ok(token);
        }

        let theme = ColorfulTheme::default();
        let token = Password::with_theme(&theme)
            .with_prompt("Figma personal access token")
            .interact()
            .wrap_err("Failed to read token")?;

        let save = Confirm::with_theme(&theme)
            .with_prompt(format!("Save token to {}?", store.path().display()))
            .default(true)
            .interact()
            .wrap_err("Failed to get confirmation")?;
        if save {
            store.save(&token).wrap_err("Failed to save token")?;
        }

        Ok(token.trim().to_string())
    }
}
