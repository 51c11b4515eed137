use std::{path::PathBuf, str::FromStr};

use pictor_ir::EmissionTarget;
use serde::Deserialize;

use crate::{Error, Result, SourceContext, validate};

/// Root of `pictor.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub figma: FigmaConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
}

/// `[figma]`: where icons are imported from.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FigmaConfig {
    /// Key of the Figma file holding the icon components.
    pub file_key: String,
    /// File the access token is stored in, relative to the config file.
    #[serde(default = "default_token_path")]
    pub token_path: PathBuf,
    /// Parallel asset downloads.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

/// `[paths]`, all relative to the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Downloaded SVGs, as `<raw>/<size>/<name>.svg`.
    #[serde(default = "default_raw")]
    pub raw: PathBuf,
    /// Optimized SVGs, same layout as `raw`.
    #[serde(default = "default_dist")]
    pub dist: PathBuf,
    /// Root the per-target directories are generated into.
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    #[serde(default = "default_targets")]
    pub targets: Vec<EmissionTarget>,
    /// Prefix of generated custom-element tags.
    #[serde(default = "default_element_prefix")]
    pub element_prefix: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorsConfig {
    /// Colors rewritten to `currentColor`; replaces the built-in palette.
    pub palette: Option<Vec<String>>,
}

fn default_token_path() -> PathBuf {
    PathBuf::from(".FIGMA_TOKEN")
}

fn default_concurrency() -> usize {
    8
}

fn default_raw() -> PathBuf {
    PathBuf::from("raw")
}

fn default_dist() -> PathBuf {
    PathBuf::from("dist")
}

fn default_out() -> PathBuf {
    PathBuf::from(".")
}

fn default_targets() -> Vec<EmissionTarget> {
    EmissionTarget::ALL.to_vec()
}

fn default_element_prefix() -> String {
    "f-icon".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw: default_raw(),
            dist: default_dist(),
            out: default_out(),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            element_prefix: default_element_prefix(),
        }
    }
}

impl Config {
    /// Parse config text, naming `filename` in diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        validate::validate(&config, &ctx)?;
        Ok(config)
    }

    /// Configured palette, if it replaces the built-in one.
    pub fn palette(&self) -> Option<&[String]> {
        self.colors.palette.as_deref()
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, crate::CONFIG_FILE_NAME)
    }
}
