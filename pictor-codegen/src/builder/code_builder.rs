use super::{CodeFragment, Renderable};

/// One indentation level in every emitted module.
pub const JS_INDENT: &str = "  ";

/// Renders fragments to text, tracking the current depth.
///
/// ```
/// use pictor_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::new();
/// builder.fragment(&CodeFragment::block("if (ok) {", vec![CodeFragment::line("run();")], "}"));
///
/// assert_eq!(builder.build(), "if (ok) {\n  run();\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(JS_INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// An empty line, never indented.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.fragment(&fragment);
        }
        self
    }

    pub fn fragment(&mut self, fragment: &CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => {
                self.line(s);
            }
            CodeFragment::Blank => {
                self.blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.line(header);
                self.depth += 1;
                for inner in body {
                    self.fragment(inner);
                }
                self.depth -= 1;
                self.line(close);
            }
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks_indent_by_depth() {
        let mut builder = CodeBuilder::new();
        builder.fragment(&CodeFragment::block(
            "if (a) {",
            vec![CodeFragment::block("if (b) {", vec![CodeFragment::line("c();")], "}")],
            "}",
        ));

        assert_eq!(builder.build(), "if (a) {\n  if (b) {\n    c();\n  }\n}\n");
    }

    #[test]
    fn test_blank_lines_carry_no_indent() {
        let mut builder = CodeBuilder::new();
        builder.fragment(&CodeFragment::block(
            "class A {",
            vec![CodeFragment::line("a() {}"), CodeFragment::Blank, CodeFragment::line("b() {}")],
            "}",
        ));

        assert_eq!(builder.build(), "class A {\n  a() {}\n\n  b() {}\n}\n");
    }
}
