use crate::builder::{CodeFragment, Renderable};

/// An ES module import statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    semicolon: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            semicolon: true,
        }
    }

    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Leave the statement unterminated.
    pub fn without_semicolon(mut self) -> Self {
        self.semicolon = false;
        self
    }

    pub fn build(&self) -> String {
        let statement = match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {} from '{}'", def, self.from),
            (Some(def), false) => format!(
                "import {}, {{ {} }} from '{}'",
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!("import {{ {} }} from '{}'", self.named.join(", "), self.from),
            (None, true) => format!("import '{}'", self.from),
        };
        if self.semicolon {
            statement + ";"
        } else {
            statement
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}
