use pictor_core::Diagnostics;

use super::{
    output::{Output, Report},
    render_diagnostics,
};

/// Report data for `pictor list`.
#[derive(Debug)]
pub struct ListReport {
    pub names: Vec<String>,
    /// `(size, icon count)` in ascending size order.
    pub sizes: Vec<(String, usize)>,
    pub diagnostics: Diagnostics,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        if self.names.is_empty() {
            out.preformatted("No icons found");
            return;
        }

        out.section(&format!("Icons ({})", self.names.len()));
        for name in &self.names {
            out.list_item(name);
        }
        out.newline();
        out.section("Sizes");
        for (size, count) in &self.sizes {
            out.key_value(&format!("  {}px", size), &count.to_string());
        }
    }
}
