//! Tree node types and lookups

/// Tag used for named data values in every region of a configuration file.
pub const VALUE_TAG: &str = "Value";

/// Child node of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

/// Element with ordered attributes and mixed children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place to keep ordering stable.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Direct child elements, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// First direct child element with the given tag.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|el| el.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// First direct `Value` child whose `name` attribute matches.
    pub fn value(&self, name: &str) -> Option<&Element> {
        self.elements()
            .find(|el| el.name == VALUE_TAG && el.attribute("name") == Some(name))
    }

    pub fn value_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(el) if el.name == VALUE_TAG && el.attribute("name") == Some(name) => {
                Some(el)
            }
            _ => None,
        })
    }

    /// Leading text: the text before the first non-text child.
    pub fn text(&self) -> Option<&str> {
        match self.children.first() {
            Some(Node::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Replace the leading text, leaving any later children untouched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        match self.children.first_mut() {
            Some(Node::Text(existing)) => *existing = text,
            _ => self.children.insert(0, Node::Text(text)),
        }
    }

    /// Comment children of this element, in document order.
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(|child| match child {
            Node::Comment(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// All element descendants (excluding `self`), pre-order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.elements().collect::<Vec<_>>().into_iter().rev().collect(),
        }
    }

    /// Append `<Value name="..">text</Value>`.
    pub fn push_value(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let mut value = Element::new(VALUE_TAG);
        value.set_attribute("name", name);
        value.children.push(Node::Text(text.into()));
        self.children.push(Node::Element(value));
    }

    pub fn push_comment(&mut self, text: impl Into<String>) {
        self.children.push(Node::Comment(text.into()));
    }
}

/// Pre-order iterator over element descendants
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        let children: Vec<&'a Element> = next.elements().collect();
        self.stack.extend(children.into_iter().rev());
        Some(next)
    }
}
