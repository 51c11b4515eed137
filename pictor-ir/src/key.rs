//! Icon identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixel size of an icon variant, e.g. `"16"` or `"24"`.
///
/// Always a non-empty run of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SizeToken(String);

/// Error returned when a string is not a valid size token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSize(pub String);

impl fmt::Display for InvalidSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a pixel size", self.0)
    }
}

impl std::error::Error for InvalidSize {}

impl SizeToken {
    /// Create a size token, rejecting anything that is not all digits.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSize> {
        let raw = raw.into();
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw))
        } else {
            Err(InvalidSize(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SizeToken {
    type Error = InvalidSize;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SizeToken> for String {
    fn from(value: SizeToken) -> Self {
        value.0
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The `(size, name)` pair that uniquely identifies one icon variant.
///
/// Ordering is by size first, then by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IconKey {
    pub size: SizeToken,
    /// Lowercase, hyphen-delimited slug.
    pub name: String,
}

impl IconKey {
    pub fn new(size: SizeToken, name: impl Into<String>) -> Self {
        Self {
            size,
            name: name.into(),
        }
    }

    /// Base file name shared by every artifact of this icon, e.g. `chevron-down-16`.
    pub fn file_stem(&self) -> String {
        format!("{}-{}", self.name, self.size)
    }

    /// Relative path in a size-per-directory asset store, e.g. `16/chevron-down.svg`.
    pub fn asset_path(&self) -> String {
        format!("{}/{}.svg", self.size, self.name)
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.size, self.name)
    }
}
