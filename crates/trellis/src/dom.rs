//! In-memory document model
//!
//! This module provides the host document an application mounts into: a tree
//! of elements with attributes and text, plus the small selector grammar the
//! mount call accepts (`#id` and bare tag names).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TrellisError;

/// A single element in the document tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, e.g. "div"
    pub tag: String,
    /// Attributes, including "id" when present
    pub attrs: BTreeMap<String, String>,
    /// Text content, rendered before child elements
    pub text: Option<String>,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes, text, or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set the text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Append a child element
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Find the first element (including self) with a matching id attribute
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_by_id_mut(id) {
                return Some(found);
            }
        }
        None
    }

    /// Find the first element (including self) with a matching tag name
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Element> {
        if self.tag == tag {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_by_tag_mut(tag) {
                return Some(found);
            }
        }
        None
    }

    /// Immutable variant of [`Element::find_by_id_mut`]
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// Serialize this element and its subtree to an HTML-like string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, 0);
        out
    }

    fn write_html(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        if self.text.is_none() && self.children.is_empty() {
            out.push_str(" />\n");
            return;
        }
        out.push_str(">\n");
        if let Some(text) = &self.text {
            out.push_str(&"  ".repeat(depth + 1));
            out.push_str(&escape(text));
            out.push('\n');
        }
        for child in &self.children {
            child.write_html(out, depth + 1);
        }
        out.push_str(&indent);
        out.push_str("</");
        out.push_str(&self.tag);
        out.push_str(">\n");
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// The selector grammar accepted by [`Document::query_selector`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Selector {
    /// `#some-id`
    Id(String),
    /// Bare tag name, e.g. `body`
    Tag(String),
}

impl Selector {
    pub(crate) fn parse(raw: &str) -> Result<Self, TrellisError> {
        let is_name = |s: &str| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };

        if let Some(id) = raw.strip_prefix('#') {
            if is_name(id) {
                return Ok(Self::Id(id.to_string()));
            }
        } else if is_name(raw) {
            return Ok(Self::Tag(raw.to_string()));
        }
        Err(TrellisError::InvalidSelector(raw.to_string()))
    }
}

/// A host document: the tree the application renders into
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Create a document with an empty `<html><body/></html>` skeleton
    pub fn new() -> Self {
        let mut root = Element::new("html");
        root.append_child(Element::new("body"));
        Self { root }
    }

    /// The document's root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the `<body>` element
    pub fn body_mut(&mut self) -> &mut Element {
        // The skeleton always carries a body; recreate it if a caller removed it.
        if !self.root.children.iter().any(|c| c.tag == "body") {
            self.root.append_child(Element::new("body"));
        }
        let idx = self
            .root
            .children
            .iter()
            .position(|c| c.tag == "body")
            .unwrap_or(0);
        &mut self.root.children[idx]
    }

    /// Resolve a selector to the first matching element, document order
    pub fn query_selector(
        &mut self,
        selector: &str,
    ) -> Result<Option<&mut Element>, TrellisError> {
        match Selector::parse(selector)? {
            Selector::Id(id) => Ok(self.root.find_by_id_mut(&id)),
            Selector::Tag(tag) => Ok(self.root.find_by_tag_mut(&tag)),
        }
    }

    /// Serialize the whole document to an HTML-like string
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
