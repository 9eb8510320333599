//! Minimal element tree used to describe what the host page shows
//!
//! `Element` and `Fragment` are the units handlers build and hand to the host
//! document. Attributes live in a `BTreeMap` so serialization is
//! deterministic: the same input always produces byte-identical HTML.

use std::collections::BTreeMap;

/// A node in the element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element with a tag, attributes and children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

const VOID_TAGS: [&str; 3] = ["br", "hr", "img"];

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    // ---------------------------------------------------------------------
    // Builder helpers
    // ---------------------------------------------------------------------

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    // ---------------------------------------------------------------------
    // Attributes
    // ---------------------------------------------------------------------

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let classes = match self.attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", &classes);
    }

    // ---------------------------------------------------------------------
    // Children
    // ---------------------------------------------------------------------

    /// Equivalent of `innerHTML = ""`
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Equivalent of assigning `textContent`: replaces every child
    pub fn set_text(&mut self, text: &str) {
        self.children = vec![Node::Text(text.to_string())];
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn append_fragment(&mut self, fragment: Fragment) {
        self.children.extend(fragment.into_nodes());
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of every descendant text node
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, false, &mut out);
        out
    }

    /// Like `text_content`, but `<br>` renders as a newline
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, true, &mut out);
        out
    }

    // ---------------------------------------------------------------------
    // Queries (descendants only, document order)
    // ---------------------------------------------------------------------

    pub fn find(&self, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        let path = find_path(&self.children, &pred, &mut 0)?;
        element_at(&self.children, &path)
    }

    pub fn find_mut(&mut self, pred: impl Fn(&Element) -> bool) -> Option<&mut Element> {
        let path = find_path(&self.children, &pred, &mut 0)?;
        element_at_mut(&mut self.children, &path)
    }

    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_matching(&self.children, &pred, &mut out);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(|el| el.id() == Some(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.find_mut(|el| el.id() == Some(id))
    }

    pub fn find_tag(&self, tag: &str) -> Option<&Element> {
        self.find(|el| el.tag == tag)
    }

    pub fn count_tag(&self, tag: &str) -> usize {
        self.find_all(|el| el.tag == tag).len()
    }

    /// Detach the first descendant matching `pred`
    pub fn remove(&mut self, pred: impl Fn(&Element) -> bool) -> Option<Element> {
        let path = find_path(&self.children, &pred, &mut 0)?;
        let (last, parent_path) = path.split_last()?;
        let siblings = if parent_path.is_empty() {
            &mut self.children
        } else {
            &mut element_at_mut(&mut self.children, parent_path)?.children
        };
        match siblings.remove(*last) {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    // ---------------------------------------------------------------------
    // Serialization
    // ---------------------------------------------------------------------

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

/// Detached list of nodes, the content of a `<template>`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn find(&self, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        let path = find_path(&self.nodes, &pred, &mut 0)?;
        element_at(&self.nodes, &path)
    }

    pub fn find_mut(&mut self, pred: impl Fn(&Element) -> bool) -> Option<&mut Element> {
        let path = find_path(&self.nodes, &pred, &mut 0)?;
        element_at_mut(&mut self.nodes, &path)
    }

    pub fn find_tag(&self, tag: &str) -> Option<&Element> {
        self.find(|el| el.tag == tag)
    }

    /// The `n`th (0-based) element with `tag`, in document order
    pub fn find_nth_tag_mut(&mut self, tag: &str, n: usize) -> Option<&mut Element> {
        let mut skip = n;
        let path = find_path(&self.nodes, &|el: &Element| el.tag == tag, &mut skip)?;
        element_at_mut(&mut self.nodes, &path)
    }

    pub fn count_tag(&self, tag: &str) -> usize {
        let mut out = Vec::new();
        collect_matching(&self.nodes, &|el: &Element| el.tag == tag, &mut out);
        out.len()
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.nodes, false, &mut out);
        out
    }
}

fn find_path<F>(nodes: &[Node], pred: &F, skip: &mut usize) -> Option<Vec<usize>>
where
    F: Fn(&Element) -> bool,
{
    for (index, node) in nodes.iter().enumerate() {
        let Node::Element(el) = node else {
            continue;
        };
        if pred(el) {
            if *skip == 0 {
                return Some(vec![index]);
            }
            *skip -= 1;
        }
        if let Some(mut path) = find_path(&el.children, pred, skip) {
            path.insert(0, index);
            return Some(path);
        }
    }
    None
}

fn element_at<'a>(nodes: &'a [Node], path: &[usize]) -> Option<&'a Element> {
    let (first, rest) = path.split_first()?;
    match nodes.get(*first)? {
        Node::Element(el) if rest.is_empty() => Some(el),
        Node::Element(el) => element_at(&el.children, rest),
        Node::Text(_) => None,
    }
}

fn element_at_mut<'a>(nodes: &'a mut [Node], path: &[usize]) -> Option<&'a mut Element> {
    let (first, rest) = path.split_first()?;
    match nodes.get_mut(*first)? {
        Node::Element(el) => {
            if rest.is_empty() {
                Some(el)
            } else {
                element_at_mut(&mut el.children, rest)
            }
        }
        Node::Text(_) => None,
    }
}

fn collect_matching<'a, F>(nodes: &'a [Node], pred: &F, out: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    for node in nodes {
        if let Node::Element(el) = node {
            if pred(el) {
                out.push(el);
            }
            collect_matching(&el.children, pred, out);
        }
    }
}

fn collect_text(nodes: &[Node], line_breaks: bool, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if line_breaks && el.tag == "br" => out.push('\n'),
            Node::Element(el) => collect_text(&el.children, line_breaks, out),
        }
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value, true));
        out.push('"');
    }
    out.push('>');
    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }
    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(&escape(text, false)),
            Node::Element(child) => write_element(child, out),
        }
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn escape(raw: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
