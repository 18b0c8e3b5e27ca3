//! XML to tree conversion
//!
//! Keeps element, text, and comment nodes in document order. Processing instructions,
//! the doctype, and anything outside the root element are dropped. Namespace
//! declarations are kept as `xmlns` attributes on the element that declares them and
//! prefixed names stay qualified, so writing the tree back is lossless.

use crate::document::node::{Element, Node};
use roxmltree::{NodeType, ParsingOptions};

/// Prefix bound to the XML namespace; never declared explicitly.
const XML_PREFIX: &str = "xml";

pub fn parse_root(xml: &str) -> Result<Element, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options)?;
    Ok(convert(doc.root_element()))
}

fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(qualified_tag(node));
    push_namespace_declarations(node, &mut element);
    for attr in node.attributes() {
        let name = match attr.namespace().and_then(|uri| attribute_prefix(node, uri)) {
            Some(prefix) => format!("{}:{}", prefix, attr.name()),
            None => attr.name().to_string(),
        };
        element.attributes.push((name, attr.value().to_string()));
    }
    for child in node.children() {
        match child.node_type() {
            NodeType::Element => element.children.push(Node::Element(convert(child))),
            NodeType::Text => {
                if let Some(text) = child.text() {
                    element.children.push(Node::Text(text.to_string()));
                }
            }
            NodeType::Comment => {
                if let Some(text) = child.text() {
                    element.children.push(Node::Comment(text.to_string()));
                }
            }
            NodeType::Root | NodeType::PI => {}
        }
    }
    element
}

fn qualified_tag(node: roxmltree::Node<'_, '_>) -> String {
    let tag = node.tag_name();
    match tag.namespace().and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, tag.name()),
        _ => tag.name().to_string(),
    }
}

/// Attributes never take the default namespace, so only a named binding counts.
fn attribute_prefix<'input>(node: roxmltree::Node<'_, 'input>, uri: &str) -> Option<&'input str> {
    if let Some(prefix) = node.lookup_prefix(uri).filter(|p| *p == XML_PREFIX) {
        return Some(prefix);
    }
    node.namespaces()
        .find(|ns| ns.uri() == uri && ns.name().is_some())
        .and_then(|ns| ns.name())
}

/// Namespaces in scope on `node` but not on its parent element were declared here.
fn push_namespace_declarations(node: roxmltree::Node<'_, '_>, element: &mut Element) {
    let parent = node.parent_element();
    for ns in node.namespaces() {
        if ns.name() == Some(XML_PREFIX) {
            continue;
        }
        let inherited = parent.is_some_and(|p| {
            p.namespaces()
                .any(|outer| outer.name() == ns.name() && outer.uri() == ns.uri())
        });
        if inherited {
            continue;
        }
        let key = match ns.name() {
            Some(prefix) => format!("xmlns:{}", prefix),
            None => "xmlns".to_string(),
        };
        element.attributes.push((key, ns.uri().to_string()));
    }
}
