//! Root attribute and inner markup extraction.

use pictor_ir::SvgAttribute;
use roxmltree::Document;

use crate::{
    Error, Result,
    serialize::{element_attributes, inner_markup},
};

/// An icon document split into what the wrappers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgMarkup {
    /// Root `<svg>` attributes, namespace declarations first.
    pub attributes: Vec<SvgAttribute>,
    /// Serialized children of the root element.
    pub inner: String,
}

pub(crate) fn parse(svg: &str) -> Result<Document<'_>> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = Document::parse_with_options(svg, options)?;

    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(Error::NotSvg {
            found: root.tag_name().name().to_string(),
        });
    }
    Ok(doc)
}

/// Extract the root `<svg>` attributes and inner markup of an icon document.
///
/// The inner markup is treated as opaque text from here on; nothing beyond
/// well-formedness is validated.
pub fn extract_root(svg: &str) -> Result<SvgMarkup> {
    let doc = parse(svg)?;
    let root = doc.root_element();

    let attributes = element_attributes(root)
        .into_iter()
        .map(|(name, value)| SvgAttribute::new(name, value))
        .collect();

    Ok(SvgMarkup {
        attributes,
        inner: inner_markup(root),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_root() {
        let markup = extract_root(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><path d="M0 0h16"/></svg>"#,
        )
        .unwrap();

        let names: Vec<&str> = markup.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["xmlns", "width", "height", "viewBox"]);
        assert_eq!(markup.attributes[3].value, "0 0 16 16");
        assert_eq!(markup.inner, r#"<path d="M0 0h16"/>"#);
    }

    #[test]
    fn test_extract_trivial_markup() {
        let markup = extract_root("<svg><path/></svg>").unwrap();
        assert!(markup.attributes.is_empty());
        assert_eq!(markup.inner, "<path/>");
    }

    #[test]
    fn test_extract_keeps_xml_declaration_out() {
        let markup =
            extract_root("<?xml version=\"1.0\"?>\n<svg fill=\"none\"><g><circle r=\"2\"/></g></svg>")
                .unwrap();
        assert_eq!(markup.attributes, vec![SvgAttribute::new("fill", "none")]);
        assert_eq!(markup.inner, r#"<g><circle r="2"/></g>"#);
    }

    #[test]
    fn test_rejects_non_svg_root() {
        let err = extract_root("<html><body/></html>").unwrap_err();
        assert!(matches!(err, Error::NotSvg { found } if found == "html"));
    }

    #[test]
    fn test_rejects_malformed_document() {
        assert!(matches!(extract_root("<svg><path></svg>"), Err(Error::Parse(_))));
    }
}
