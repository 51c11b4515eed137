use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// The personal access token persisted next to the project config.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored token, or `None` if there is no token file or it is blank.
    pub fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::Token {
                path: self.path.clone(),
                source,
            }),
        }
    }

    pub fn save(&self, token: &str) -> Result<()> {
        let to_error = |source: std::io::Error| Error::Token {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(to_error)?;
        }
        std::fs::write(&self.path, token.trim()).map_err(to_error)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_token_file() {
        let temp = TempDir::new().unwrap();
        let store = TokenStore::new(temp.path().join(".FIGMA_TOKEN"));
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_save_then_read_trims() {
        let temp = TempDir::new().unwrap();
        let store = TokenStore::new(temp.path().join("secrets").join(".FIGMA_TOKEN"));

        store.save("  figd_abc\n").unwrap();

        assert_eq!(store.read().unwrap().as_deref(), Some("figd_abc"));
    }

    #[test]
    fn test_blank_token_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".FIGMA_TOKEN");
        std::fs::write(&path, "\n").unwrap();

        assert_eq!(TokenStore::new(path).read().unwrap(), None);
    }
}
