//! Checks serde cannot express.

use std::collections::HashSet;

use crate::{Config, Result, SourceContext};

pub(crate) fn validate(config: &Config, ctx: &SourceContext) -> Result<()> {
    if config.figma.file_key.trim().is_empty() {
        return Err(ctx.invalid_value(
            "file_key",
            "figma file key must not be empty",
            Some("copy the key from the file URL: figma.com/file/<key>/...".to_string()),
        ));
    }

    if config.figma.concurrency == 0 {
        return Err(ctx.invalid_value(
            "concurrency",
            "concurrency must be at least 1",
            None,
        ));
    }

    if let Some(palette) = config.palette() {
        if let Some(color) = palette.iter().find(|color| !is_hex_color(color)) {
            return Err(ctx.invalid_value(
                "palette",
                format!("'{}' is not a hex color", color),
                Some("use '#' followed by 3, 6 or 8 hex digits, e.g. '#71717A'".to_string()),
            ));
        }
    }

    let targets = &config.generate.targets;
    if targets.is_empty() {
        return Err(ctx.invalid_value(
            "targets",
            "at least one target is required",
            Some("valid targets are: elements, react, vue".to_string()),
        ));
    }
    let mut seen = HashSet::new();
    if let Some(target) = targets.iter().find(|target| !seen.insert(**target)) {
        return Err(ctx.invalid_value(
            "targets",
            format!("target '{}' is listed twice", target),
            None,
        ));
    }

    if let Some(reason) = validate_element_prefix(&config.generate.element_prefix) {
        return Err(ctx.invalid_value(
            "element_prefix",
            format!(
                "invalid element prefix '{}': {}",
                config.generate.element_prefix, reason
            ),
            Some("use lowercase letters, digits and hyphens, e.g. 'f-icon'".to_string()),
        ));
    }

    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn validate_element_prefix(prefix: &str) -> Option<&'static str> {
    let Some(first) = prefix.chars().next() else {
        return Some("prefix is empty");
    };
    if !first.is_ascii_lowercase() {
        return Some("must start with a lowercase letter");
    }
    if prefix.ends_with('-') {
        return Some("must not end with a hyphen");
    }
    if !prefix
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Some("only lowercase letters, digits and hyphens are allowed");
    }
    None
}
