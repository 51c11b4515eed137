use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "pictor.toml";

/// A `pictor.toml` on disk with its raw content and parsed config.
#[derive(Debug, Clone)]
pub struct PictorToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl PictorToml {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = Config::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory relative config paths are resolved against.
    pub fn root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Resolve a config-relative path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root().join(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_resolves_relative_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[figma]\nfile_key = \"abc\"\n").unwrap();

        let toml = PictorToml::open(&path).unwrap();

        assert_eq!(toml.config().figma.file_key, "abc");
        assert_eq!(toml.root(), temp.path());
        assert_eq!(
            toml.resolve(&toml.config().paths.dist),
            temp.path().join("dist")
        );
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = PictorToml::open(temp.path().join(CONFIG_FILE_NAME)).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_bare_file_name_resolves_to_cwd() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[figma]\nfile_key = \"abc\"\n").unwrap();
        let mut toml = PictorToml::open(&path).unwrap();
        toml.path = PathBuf::from(CONFIG_FILE_NAME);

        assert_eq!(toml.root(), Path::new("."));
    }
}
