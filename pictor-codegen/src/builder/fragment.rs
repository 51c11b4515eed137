/// A piece of generated code, independent of its final indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// `header`, then `body` one level deeper, then `close`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: &str) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.to_string(),
        }
    }
}

/// Module-level AST nodes.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
