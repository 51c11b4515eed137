//! Allow-list color rewriting.
//!
//! Icons are drawn with the brand palette, but wrappers should inherit the
//! page foreground color. Only colors that are known palette entries are
//! replaced: icons may use status or semantic colors on purpose, and those
//! must survive untouched.

use std::borrow::Cow;

/// Token that makes an SVG paint inherit the foreground color.
pub const CURRENT_COLOR: &str = "currentColor";

/// Attributes whose value is a color.
pub const COLOR_ATTRIBUTES: [&str; 6] = [
    "fill",
    "stroke",
    "color",
    "stop-color",
    "flood-color",
    "lighting-color",
];

/// Palette colors rewritten when no palette is configured.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#71717A", "#52525B", "#3F3F46", "#27272A", "#18181B", "#000000", "#000",
];

/// Replaces known palette colors on color attributes with [`CURRENT_COLOR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRewriteRule {
    /// Lower-cased palette entries.
    palette: Vec<String>,
}

impl ColorRewriteRule {
    pub fn new(palette: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            palette: palette
                .into_iter()
                .map(|color| color.as_ref().trim().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    fn is_palette_color(&self, value: &str) -> bool {
        let value = value.trim().to_ascii_lowercase();
        self.palette.iter().any(|color| *color == value)
    }

    /// Rewrite a single attribute value.
    pub fn rewrite<'a>(&self, attribute: &str, value: &'a str) -> Cow<'a, str> {
        if COLOR_ATTRIBUTES.contains(&attribute) && self.is_palette_color(value) {
            Cow::Borrowed(CURRENT_COLOR)
        } else {
            Cow::Borrowed(value)
        }
    }

    /// Rewrite the declarations of an inline `style` attribute.
    ///
    /// Declarations are rebuilt as `prop:value` joined by `;`, which is also
    /// how the optimizer writes them.
    pub fn rewrite_style<'a>(&self, style: &'a str) -> Cow<'a, str> {
        let mut changed = false;
        let declarations: Vec<String> = style
            .split(';')
            .filter(|decl| !decl.trim().is_empty())
            .map(|decl| match decl.split_once(':') {
                Some((prop, value)) => {
                    let prop = prop.trim();
                    let rewritten = self.rewrite(prop, value);
                    if rewritten != value {
                        changed = true;
                    }
                    format!("{}:{}", prop, rewritten.trim())
                }
                None => decl.trim().to_string(),
            })
            .collect();

        if changed {
            Cow::Owned(declarations.join(";"))
        } else {
            Cow::Borrowed(style)
        }
    }
}

impl Default for ColorRewriteRule {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE)
    }
}
