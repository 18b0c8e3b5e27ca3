//! Configuration document tree
//!
//! A small labelled tree that is enough to patch model configuration files: elements
//! with ordered attributes, text, and comments. Cloning a tree yields a fully
//! independent copy, which is what the template manager relies on.

pub mod node;
pub mod parse;
pub mod writer;

pub use node::{Descendants, Element, Node, VALUE_TAG};

/// A parsed configuration document, owned through its root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    root: Element,
}

impl ConfigDocument {
    /// Parse a document from XML text.
    pub fn parse(xml: &str) -> Result<Self, roxmltree::Error> {
        Ok(Self {
            root: parse::parse_root(xml)?,
        })
    }

    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Serialize without a declaration and without re-indenting.
    pub fn to_xml_string(&self) -> String {
        writer::to_xml_string(&self.root)
    }
}
