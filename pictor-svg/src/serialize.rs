//! Markup serialization for icon documents.

use roxmltree::Node;
use xmlwriter::{Indent, XmlWriter};

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Namespace declarations on `node` that its parent element does not already have.
///
/// Returned as `(attribute name, uri)`, e.g. `("xmlns:xlink", "http://...")`.
pub(crate) fn declared_namespaces(node: Node<'_, '_>) -> Vec<(String, String)> {
    let inherited: Vec<(Option<String>, String)> = node
        .parent_element()
        .map(|parent| {
            parent
                .namespaces()
                .map(|ns| (ns.name().map(str::to_string), ns.uri().to_string()))
                .collect()
        })
        .unwrap_or_default();

    node.namespaces()
        .filter(|ns| ns.uri() != XML_NAMESPACE)
        .map(|ns| (ns.name().map(str::to_string), ns.uri().to_string()))
        .filter(|ns| !inherited.contains(ns))
        .map(|(prefix, uri)| match prefix {
            Some(prefix) => (format!("xmlns:{}", prefix), uri),
            None => ("xmlns".to_string(), uri),
        })
        .collect()
}

/// Qualified name for a name in the given namespace, as seen from `node`.
pub(crate) fn qualified_name(node: Node<'_, '_>, local: &str, namespace: Option<&str>) -> String {
    let prefix = match namespace {
        Some(XML_NAMESPACE) => Some("xml"),
        Some(uri) => node.lookup_prefix(uri),
        None => None,
    };
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, local),
        _ => local.to_string(),
    }
}

/// Attributes of an element in document order, namespace declarations first.
pub(crate) fn element_attributes(node: Node<'_, '_>) -> Vec<(String, String)> {
    let mut attributes = declared_namespaces(node);
    attributes.extend(node.attributes().map(|attr| {
        (
            qualified_name(node, attr.name(), attr.namespace()),
            attr.value().to_string(),
        )
    }));
    attributes
}

/// A writer producing compact markup with double-quoted attributes.
pub(crate) fn compact_writer() -> XmlWriter {
    XmlWriter::new(xmlwriter::Options {
        use_single_quote: false,
        indent: Indent::None,
        attributes_indent: Indent::None,
    })
}

/// Serialize the children of `node` exactly as parsed.
fn write_children(xml: &mut XmlWriter, node: Node<'_, '_>) {
    for child in node.children() {
        write_node(xml, child);
    }
}

fn write_node(xml: &mut XmlWriter, node: Node<'_, '_>) {
    if node.is_element() {
        let tag = node.tag_name();
        xml.start_element(&qualified_name(node, tag.name(), tag.namespace()));
        for (name, value) in element_attributes(node) {
            xml.write_attribute(&name, value.as_str());
        }
        write_children(xml, node);
        xml.end_element();
    } else if node.is_text() {
        xml.write_text(node.text().unwrap_or_default());
    } else if node.is_comment() {
        xml.write_comment(node.text().unwrap_or_default());
    }
}

/// The serialized children of `node`, without `node`'s own tags.
pub(crate) fn inner_markup(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    let name = qualified_name(node, tag.name(), tag.namespace());

    let mut xml = compact_writer();
    xml.start_element(&name);
    write_children(&mut xml, node);
    let out = xml.end_document();

    // A childless element is written as `<name/>` and has no inner markup.
    out.trim_end()
        .strip_prefix(&format!("<{}>", name))
        .and_then(|rest| rest.strip_suffix(&format!("</{}>", name)))
        .unwrap_or_default()
        .to_string()
}
