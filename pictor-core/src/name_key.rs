//! Icon key parsing.
//!
//! Icons reach the pipeline under two naming schemes:
//!
//! - asset paths in a size-per-directory store: `dist/16/chevron-down.svg`
//! - flat identifiers produced from design-tool components: `16-chevron-down`
//!
//! Both are parsed through [`NameKeyParser`] into an [`IconKey`], with
//! [`ParsedKey::Unparseable`] as the explicit failure variant so callers can
//! skip malformed input without treating it as an error.

use std::{fmt, path::Path};

use pictor_ir::{IconKey, SizeToken};

use crate::utils::to_pascal_case;

/// Result of parsing a raw identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKey {
    Parsed(IconKey),
    Unparseable(Unparseable),
}

impl ParsedKey {
    /// Convert into an `Option`, discarding the failure reason.
    pub fn ok(self) -> Option<IconKey> {
        match self {
            ParsedKey::Parsed(key) => Some(key),
            ParsedKey::Unparseable(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, ParsedKey::Parsed(_))
    }
}

/// Why an identifier could not be turned into a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unparseable {
    /// The input does not have the expected shape at all.
    Shape(String),
    /// The size segment is not a run of digits.
    Size(String),
    /// The shape matched but the name is empty.
    EmptyName,
}

impl fmt::Display for Unparseable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unparseable::Shape(raw) => write!(f, "'{}' is not a <size>/<name> identifier", raw),
            Unparseable::Size(size) => write!(f, "'{}' is not a pixel size", size),
            Unparseable::EmptyName => write!(f, "icon name is empty"),
        }
    }
}

/// A naming scheme that maps raw identifiers to icon keys.
pub trait NameKeyParser {
    fn parse(&self, raw: &str) -> ParsedKey;
}

/// Parses asset paths of the form `<...>/<digits>/<name>.svg`.
///
/// The directory directly containing the file must be all digits; the file
/// stem is the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathKeys;

impl NameKeyParser for PathKeys {
    fn parse(&self, raw: &str) -> ParsedKey {
        let path = Path::new(raw);
        let shape = || ParsedKey::Unparseable(Unparseable::Shape(raw.to_string()));

        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !is_svg {
            return shape();
        }

        let Some(dir) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|d| d.to_str())
        else {
            return shape();
        };
        let Ok(size) = SizeToken::new(dir) else {
            return shape();
        };

        match path.file_stem().and_then(|s| s.to_str()) {
            Some(name) if !name.is_empty() => ParsedKey::Parsed(IconKey::new(size, name)),
            _ => ParsedKey::Unparseable(Unparseable::EmptyName),
        }
    }
}

/// Parses flat identifiers of the form `<size>-<name>`.
///
/// Only the first hyphen separates; the rest of the name may contain hyphens
/// and is lower-cased.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatKeys;

impl NameKeyParser for FlatKeys {
    fn parse(&self, raw: &str) -> ParsedKey {
        let Some((size, rest)) = raw.split_once('-') else {
            return ParsedKey::Unparseable(Unparseable::Shape(raw.to_string()));
        };
        let Ok(size) = SizeToken::new(size) else {
            return ParsedKey::Unparseable(Unparseable::Size(size.to_string()));
        };
        if rest.is_empty() {
            return ParsedKey::Unparseable(Unparseable::EmptyName);
        }
        ParsedKey::Parsed(IconKey::new(size, rest.to_lowercase()))
    }
}

/// Export identifier for a key: PascalCase of `icon-<name><size>`.
pub fn export_name(key: &IconKey) -> String {
    to_pascal_case(&format!("icon-{}{}", key.name, key.size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(size: &str, name: &str) -> IconKey {
        IconKey::new(SizeToken::new(size).unwrap(), name)
    }

    #[test]
    fn test_path_keys() {
        assert_eq!(
            PathKeys.parse("16/chevron-down.svg"),
            ParsedKey::Parsed(key("16", "chevron-down"))
        );
        assert_eq!(
            PathKeys.parse("/home/u2/dist/24/home.svg"),
            ParsedKey::Parsed(key("24", "home"))
        );
    }

    #[test]
    fn test_path_keys_rejects_missing_size_dir() {
        assert!(!PathKeys.parse("icons/chevron-down.svg").is_parsed());
        assert!(!PathKeys.parse("chevron-down.svg").is_parsed());
        assert!(!PathKeys.parse("16x16/chevron-down.svg").is_parsed());
    }

    #[test]
    fn test_path_keys_rejects_other_extensions() {
        assert!(!PathKeys.parse("16/chevron-down.png").is_parsed());
        assert!(!PathKeys.parse("16/chevron-down").is_parsed());
    }

    #[test]
    fn test_path_keys_extracts_digits_and_stem_exactly() {
        for (size, name) in [("16", "a"), ("24", "arrow-left-2"), ("128", "x-y-z")] {
            let raw = format!("dist/{}/{}.svg", size, name);
            assert_eq!(PathKeys.parse(&raw), ParsedKey::Parsed(key(size, name)));
        }
    }

    #[test]
    fn test_flat_keys_split_on_first_hyphen() {
        assert_eq!(
            FlatKeys.parse("16-chevron-down"),
            ParsedKey::Parsed(key("16", "chevron-down"))
        );
        assert_eq!(
            FlatKeys.parse("24-Arrow-Left"),
            ParsedKey::Parsed(key("24", "arrow-left"))
        );
    }

    #[test]
    fn test_flat_keys_failures() {
        assert_eq!(
            FlatKeys.parse("16"),
            ParsedKey::Unparseable(Unparseable::Shape("16".to_string()))
        );
        assert_eq!(
            FlatKeys.parse("16-"),
            ParsedKey::Unparseable(Unparseable::EmptyName)
        );
        assert_eq!(
            FlatKeys.parse("large-home"),
            ParsedKey::Unparseable(Unparseable::Size("large".to_string()))
        );
    }

    #[test]
    fn test_flat_keys_idempotent() {
        let first = FlatKeys.parse("32-Chevron-Down");
        let second = FlatKeys.parse("32-Chevron-Down");
        assert_eq!(first, second);

        let key = first.ok().unwrap();
        assert_eq!(export_name(&key), export_name(&key));
        assert_eq!(export_name(&key), "IconChevronDown32");
    }

    #[test]
    fn test_export_name() {
        assert_eq!(export_name(&key("16", "chevron-down")), "IconChevronDown16");
        assert_eq!(export_name(&key("24", "chevron-down")), "IconChevronDown24");
        assert_eq!(export_name(&key("32", "home")), "IconHome32");
    }
}
