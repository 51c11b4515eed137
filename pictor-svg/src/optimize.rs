//! Icon document normalization.
//!
//! Downloaded icons are passed through [`Optimizer`] before code generation:
//!
//! - comments, processing instructions, `<metadata>` and whitespace-only text are dropped
//! - palette colors become `currentColor` through [`ColorRewriteRule`]
//! - attributes are put in a stable order
//! - ids (and references to them) get a prefix, so several inlined icons
//!   on one page cannot clash

use std::cmp::Ordering;

use roxmltree::Node;
use xmlwriter::XmlWriter;

use crate::{
    ColorRewriteRule, Result,
    markup::parse,
    serialize::{compact_writer, element_attributes, qualified_name},
};

/// Attributes that sort ahead of the alphabetical rest, in this order.
const ATTRIBUTE_ORDER: [&str; 17] = [
    "id", "width", "height", "x", "x1", "x2", "y", "y1", "y2", "cx", "cy", "r", "fill", "stroke",
    "marker", "d", "points",
];

const DROPPED_ELEMENTS: [&str; 1] = ["metadata"];

/// Settings for one optimizer run.
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    pub colors: ColorRewriteRule,
    pub sort_attributes: bool,
    /// Prepended to every id, and to every `#id` reference.
    pub id_prefix: Option<String>,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            colors: ColorRewriteRule::default(),
            sort_attributes: true,
            id_prefix: None,
        }
    }
}

/// An optimized document with its size before and after.
#[derive(Debug, Clone)]
pub struct Optimized {
    pub data: String,
    pub original_bytes: usize,
}

impl Optimized {
    pub fn optimized_bytes(&self) -> usize {
        self.data.len()
    }

    /// Size reduction in percent; negative if the document grew.
    pub fn savings_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        100.0 - (self.optimized_bytes() as f64 * 100.0) / self.original_bytes as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    options: OptimizeOptions,
}

impl Optimizer {
    pub fn new(options: OptimizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OptimizeOptions {
        &self.options
    }

    pub fn optimize(&self, svg: &str) -> Result<Optimized> {
        let doc = parse(svg)?;
        let mut xml = compact_writer();
        self.write_element(&mut xml, doc.root_element());

        let optimized = Optimized {
            data: xml.end_document().trim_end().to_string(),
            original_bytes: svg.len(),
        };
        tracing::trace!(
            before = optimized.original_bytes,
            after = optimized.optimized_bytes(),
            "optimized svg"
        );
        Ok(optimized)
    }

    fn write_element(&self, xml: &mut XmlWriter, node: Node<'_, '_>) {
        let tag = node.tag_name();
        xml.start_element(&qualified_name(node, tag.name(), tag.namespace()));

        let mut attributes: Vec<(String, String)> = element_attributes(node)
            .into_iter()
            .map(|(attr, value)| {
                let value = self.rewrite_value(&attr, &value);
                (attr, value)
            })
            .collect();
        if self.options.sort_attributes {
            attributes.sort_by(|a, b| compare_attributes(&a.0, &b.0));
        }
        for (attr, value) in &attributes {
            xml.write_attribute(attr, value.as_str());
        }

        for child in node.children().filter(|c| self.keeps(*c)) {
            if child.is_element() {
                self.write_element(xml, child);
            } else {
                xml.write_text(child.text().unwrap_or_default());
            }
        }
        xml.end_element();
    }

    fn keeps(&self, node: Node<'_, '_>) -> bool {
        if node.is_element() {
            !DROPPED_ELEMENTS.contains(&node.tag_name().name())
        } else if node.is_text() {
            node.text().is_some_and(|text| !text.trim().is_empty())
        } else {
            false
        }
    }

    fn rewrite_value(&self, attribute: &str, value: &str) -> String {
        let value = match attribute {
            "style" => self.options.colors.rewrite_style(value).into_owned(),
            _ => self.options.colors.rewrite(attribute, value).into_owned(),
        };

        let Some(prefix) = &self.options.id_prefix else {
            return value;
        };
        match attribute {
            "id" => format!("{}{}", prefix, value),
            "href" | "xlink:href" if value.starts_with('#') => {
                format!("#{}{}", prefix, &value[1..])
            }
            _ if value.contains("url(#") => value.replace("url(#", &format!("url(#{}", prefix)),
            _ => value,
        }
    }
}

fn attribute_rank(name: &str) -> (u8, usize) {
    if name == "xmlns" || name.starts_with("xmlns:") {
        return (0, 0);
    }
    match ATTRIBUTE_ORDER.iter().position(|known| *known == name) {
        Some(index) => (1, index),
        None => (2, 0),
    }
}

fn compare_attributes(a: &str, b: &str) -> Ordering {
    attribute_rank(a)
        .cmp(&attribute_rank(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimize(svg: &str, options: OptimizeOptions) -> String {
        Optimizer::new(options).optimize(svg).unwrap().data
    }

    #[test]
    fn test_rewrites_palette_colors_only() {
        let out = optimize(
            r##"<svg xmlns="http://www.w3.org/2000/svg"><path fill="#71717A" d="M0"/><circle fill="#E02424" r="2"/></svg>"##,
            OptimizeOptions::default(),
        );
        assert_eq!(
            out,
            r##"<svg xmlns="http://www.w3.org/2000/svg"><path fill="currentColor" d="M0"/><circle r="2" fill="#E02424"/></svg>"##
        );
    }

    #[test]
    fn test_drops_comments_metadata_and_whitespace() {
        let out = optimize(
            "<svg>\n  <!-- exported -->\n  <metadata>x</metadata>\n  <path d=\"M0\"/>\n</svg>",
            OptimizeOptions::default(),
        );
        assert_eq!(out, "<svg><path d=\"M0\"/></svg>");
    }

    #[test]
    fn test_sorts_attributes() {
        let out = optimize(
            r#"<svg viewBox="0 0 16 16" height="16" width="16" xmlns="http://www.w3.org/2000/svg"/>"#,
            OptimizeOptions::default(),
        );
        assert_eq!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"/>"#
        );
    }

    #[test]
    fn test_prefixes_ids_and_references() {
        let options = OptimizeOptions {
            id_prefix: Some("k3Xa".to_string()),
            ..Default::default()
        };
        let out = optimize(
            r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><defs><clipPath id="a"><path d="M0"/></clipPath></defs><g clip-path="url(#a)"><use xlink:href="#a"/></g></svg>"##,
            options,
        );
        assert!(out.contains(r#"<clipPath id="k3Xaa">"#));
        assert!(out.contains(r##"clip-path="url(#k3Xaa)""##));
        assert!(out.contains(r##"<use xlink:href="#k3Xaa"/>"##));
    }

    #[test]
    fn test_output_stays_well_formed() {
        let out = optimize(
            r#"<svg><text title="a &amp; &quot;b&quot;">1 &lt; 2</text></svg>"#,
            OptimizeOptions::default(),
        );
        let doc = roxmltree::Document::parse(&out).unwrap();
        let text = doc.root_element().first_element_child().unwrap();
        assert_eq!(text.attribute("title"), Some(r#"a & "b""#));
        assert_eq!(text.text(), Some("1 < 2"));
    }

    #[test]
    fn test_savings() {
        let optimized = Optimizer::default()
            .optimize("<svg>\n\n\n\n\n\n\n\n\n\n<path/></svg>")
            .unwrap();
        assert_eq!(optimized.data, "<svg><path/></svg>");
        assert!(optimized.savings_percent() > 0.0);
    }
}
