use crate::builder::{CodeFragment, Renderable};

/// An ES module export statement.
#[derive(Debug, Clone, Default)]
pub struct Export {
    from: Option<String>,
    default: Option<String>,
    /// `(exported name, local name)`; equal when not renamed.
    named: Vec<(String, String)>,
    bare: bool,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// `export default <expr>`.
    pub fn default_export(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.named.push((name.clone(), name));
        self
    }

    /// `export { local as name }`.
    pub fn named_as(mut self, local: impl Into<String>, name: impl Into<String>) -> Self {
        self.named.push((name.into(), local.into()));
        self
    }

    /// Leave the statement unterminated.
    pub fn without_semicolon(mut self) -> Self {
        self.bare = true;
        self
    }

    /// The statement text, or `None` for a combination that is not valid
    /// JavaScript.
    pub fn build(&self) -> Option<String> {
        let names = || {
            self.named
                .iter()
                .map(|(name, local)| {
                    if name == local {
                        name.clone()
                    } else {
                        format!("{} as {}", local, name)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ")
        };

        let statement = match (&self.from, &self.default, self.named.is_empty()) {
            (Some(from), None, true) => format!("export * from '{}'", from),
            (Some(from), None, false) => format!("export {{ {} }} from '{}'", names(), from),
            (None, Some(expr), true) => format!("export default {}", expr),
            (None, None, false) => format!("export {{ {} }}", names()),
            _ => return None,
        };
        Some(if self.bare { statement } else { statement + ";" })
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.build().map(CodeFragment::line).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_export_all() {
        let e = Export::new().from("./home-16.js");
        assert_eq!(e.build().unwrap(), "export * from './home-16.js';");
        assert_eq!(
            e.without_semicolon().build().unwrap(),
            "export * from './home-16.js'"
        );
    }

    #[test]
    fn test_re_export_default_as() {
        let e = Export::new()
            .from("./home-16.js")
            .named_as("default", "IconHome16")
            .without_semicolon();
        assert_eq!(
            e.build().unwrap(),
            "export { default as IconHome16 } from './home-16.js'"
        );
    }

    #[test]
    fn test_export_default_expression() {
        let e = Export::new().default_export("() => null");
        assert_eq!(e.build().unwrap(), "export default () => null;");
    }

    #[test]
    fn test_invalid_combination_renders_nothing() {
        let e = Export::new().from("./a.js").default_export("x");
        assert!(e.build().is_none());
        assert!(e.to_fragments().is_empty());
    }
}
