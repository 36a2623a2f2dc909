//! Owned visual tree
//!
//! Every layout builds an [`Element`] tree that is later serialized to HTML.
//! Pagination and the select view mutate this tree in place (visibility,
//! classes, rebuilt children) instead of rebuilding it from the data.

use indexmap::IndexMap;
use std::fmt::Write;

/// A node in the visual tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on output
    Text(String),
    /// Trusted markup emitted verbatim (static icons)
    Raw(&'static str),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with classes, attributes and children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Node>,
    /// Hidden elements render with `display: none`
    pub hidden: bool,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a class, returning whether it is now present
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.hidden = !visible;
    }

    /// Child elements, skipping text nodes
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|child| match child {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// First element (depth-first, including `self`) carrying `class`
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.elements().find_map(|el| el.find_class(class))
    }

    pub fn find_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.elements_mut().find_map(|el| el.find_class_mut(class))
    }

    /// All elements (depth-first, including `self`) carrying `class`
    pub fn find_all_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(&mut found, &|el| el.has_class(class));
        found
    }

    /// All elements (depth-first, including `self`) with the given tag
    pub fn find_all_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(&mut found, &|el| el.tag == tag);
        found
    }

    fn collect<'a>(&'a self, found: &mut Vec<&'a Element>, pred: &dyn Fn(&Element) -> bool) {
        if pred(self) {
            found.push(self);
        }
        for el in self.elements() {
            el.collect(found, pred);
        }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_text(out),
                Node::Text(text) => out.push_str(text),
                Node::Raw(_) => {}
            }
        }
    }

    /// Serialize the tree to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attr(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        if self.hidden {
            out.push_str(" style=\"display: none\"");
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => out.push_str(&escape_text(text)),
                Node::Raw(raw) => out.push_str(raw),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text content for HTML output
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape an attribute value for HTML output
pub fn escape_attr(input: &str) -> String {
    escape_text(input).replace('"', "&quot;")
}
