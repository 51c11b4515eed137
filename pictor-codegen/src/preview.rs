//! HTML overview page of every icon, grouped by size.

use pictor_core::IconCatalog;
use pictor_ir::Icon;

use crate::builder::{CodeBuilder, CodeFragment};

/// Location of the page below the output root.
pub const PREVIEW_PATH: &str = "preview/index.html";

const STYLE: [&str; 6] = [
    "body { font-family: system-ui, sans-serif; margin: 2rem; color: #18181b; }",
    "h2 { font-size: 1rem; margin: 2rem 0 1rem; }",
    "ul { display: flex; flex-wrap: wrap; gap: 1rem; list-style: none; padding: 0; }",
    "li { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; width: 7rem; }",
    "span { font-size: 0.75rem; text-align: center; overflow-wrap: anywhere; }",
    "svg { color: #52525b; }",
];

/// Render the preview page for `catalog`.
///
/// Icons are inlined as `<svg>` elements, so the page needs no assets.
pub fn render_preview(catalog: &IconCatalog) -> String {
    let head = CodeFragment::block(
        "<head>",
        vec![
            CodeFragment::line("<meta charset=\"utf-8\">"),
            CodeFragment::line(format!("<title>Icons ({})</title>", catalog.len())),
            CodeFragment::block(
                "<style>",
                STYLE.iter().map(|rule| CodeFragment::line(*rule)).collect(),
                "</style>",
            ),
        ],
        "</head>",
    );

    let sections = catalog
        .by_size()
        .into_iter()
        .map(|(size, icons)| {
            CodeFragment::block(
                "<section>",
                vec![
                    CodeFragment::line(format!("<h2>{}px ({})</h2>", size, icons.len())),
                    CodeFragment::block("<ul>", icons.into_iter().map(icon_item).collect(), "</ul>"),
                ],
                "</section>",
            )
        })
        .collect();

    let mut builder = CodeBuilder::new();
    builder
        .line("<!doctype html>")
        .fragment(&CodeFragment::block(
            "<html lang=\"en\">",
            vec![head, CodeFragment::block("<body>", sections, "</body>")],
            "</html>",
        ));
    builder.build()
}

fn icon_item(icon: &Icon) -> CodeFragment {
    let attributes: String = icon
        .attributes
        .iter()
        .map(|attr| format!(" {}=\"{}\"", attr.name, escape_html(&attr.value)))
        .collect();

    CodeFragment::block(
        format!("<li title=\"{}\">", escape_html(&icon.export_name)),
        vec![
            CodeFragment::line(format!("<svg{}>{}</svg>", attributes, icon.inner_markup)),
            CodeFragment::line(format!("<span>{}</span>", escape_html(icon.name()))),
        ],
        "</li>",
    )
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
