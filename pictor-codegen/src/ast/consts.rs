use crate::builder::{CodeFragment, Renderable};

/// A `const` declaration, exported unless made private.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            exported: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn build(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        format!("{}const {} = {};", export, self.name, self.value)
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_const() {
        assert_eq!(Const::new("size", "16").build(), "export const size = 16;");
        assert_eq!(Const::new("size", "16").private().build(), "const size = 16;");
    }
}
