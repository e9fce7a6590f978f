//! In-memory document fragment
//!
//! An HTML fragment parsed with scraper (html5ever underneath) and edited in
//! place through its `ego_tree` arena. It implements [`DomTree`] so the
//! splitter runs without a browser; selectors go through `scraper::Selector`
//! and match against the live state of the tree.

use super::DomTree;
use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node, Selector};

pub use ego_tree::NodeId;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Parsed HTML fragment
///
/// The root is the `<html>` container html5ever creates for fragments; its
/// children are the fragment's top-level nodes. Detached nodes stay in the
/// arena until the fragment is dropped.
#[derive(Debug, Clone)]
pub struct Fragment {
    html: Html,
    root: NodeId,
}

impl Fragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::parse("")
    }

    /// Parse an HTML fragment, recovering from malformed markup like a browser
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_fragment(markup);
        if !html.errors.is_empty() {
            log::debug!("Recovered from {} markup errors", html.errors.len());
        }

        let root = html.root_element().id();
        Self { html, root }
    }

    /// The container holding the top-level nodes
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.html.tree.get(id)?.parent().map(|parent| parent.id())
    }

    fn element(&self, id: NodeId) -> Option<&Element> {
        self.html.tree.get(id)?.value().as_element()
    }

    /// Tag name of an element, `None` for any other node
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(Element::name)
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(mut node) = self.html.tree.get_mut(id) else {
            return;
        };
        let Node::Element(element) = node.value() else {
            return;
        };

        let mut replaced = false;
        let mut attributes: Vec<Attribute> = element
            .attrs()
            .map(|(key, existing)| {
                if key == name {
                    replaced = true;
                    attribute(key, value)
                } else {
                    attribute(key, existing)
                }
            })
            .collect();
        if !replaced {
            attributes.push(attribute(name, value));
        }

        *element = Element::new(html_name(element.name()), attributes);
    }

    /// Serialize all top-level nodes
    pub fn to_markup(&self) -> String {
        self.inner_markup(self.root)
    }

    /// Serialize the children of a node
    pub fn inner_markup(&self, id: NodeId) -> String {
        match self.html.tree.get(id) {
            Some(node) => match ElementRef::wrap(node) {
                Some(element) => element.inner_html(),
                None => String::new(),
            },
            None => String::new(),
        }
    }

    /// Serialize an element including its own tags
    pub fn outer_markup(&self, id: NodeId) -> String {
        self.html
            .tree
            .get(id)
            .and_then(ElementRef::wrap)
            .map(|element| element.html())
            .unwrap_or_default()
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree for Fragment {
    type Node = NodeId;

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.html
            .tree
            .get(*node)
            .map(|node| node.children().map(|child| child.id()).collect())
            .unwrap_or_default()
    }

    fn is_text(&self, node: &NodeId) -> bool {
        self.html
            .tree
            .get(*node)
            .map_or(false, |node| node.value().is_text())
    }

    fn text_value(&self, node: &NodeId) -> String {
        self.html
            .tree
            .get(*node)
            .and_then(|node| node.value().as_text())
            .map(|text| text.text.to_string())
            .unwrap_or_default()
    }

    fn text_content(&self, node: &NodeId) -> String {
        let Some(node) = self.html.tree.get(*node) else {
            return String::new();
        };

        node.descendants()
            .filter_map(|descendant| descendant.value().as_text())
            .map(|text| &*text.text)
            .collect()
    }

    fn replace_children(&mut self, container: &NodeId, children: &[NodeId]) {
        for child in self.children(container) {
            if let Some(mut child) = self.html.tree.get_mut(child) {
                child.detach();
            }
        }

        for child in children {
            if let Some(mut child) = self.html.tree.get_mut(*child) {
                child.detach();
            }
            if let Some(mut parent) = self.html.tree.get_mut(*container) {
                parent.append_id(*child);
            }
        }
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let element = Element::new(html_name(tag), Vec::new());
        self.html.tree.orphan(Node::Element(element)).id()
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        let text = Text {
            text: StrTendril::from(text),
        };
        self.html.tree.orphan(Node::Text(text)).id()
    }

    fn set_text_content(&mut self, node: &NodeId, text: &str) {
        if let Some(mut existing) = self.html.tree.get_mut(*node) {
            if let Node::Text(existing) = existing.value() {
                existing.text = StrTendril::from(text);
                return;
            }
        }

        if text.is_empty() {
            self.replace_children(node, &[]);
        } else {
            let text_node = self.create_text(text);
            self.replace_children(node, &[text_node]);
        }
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        let mut declarations = parse_style(self.attribute(*node, "style").unwrap_or_default());
        match declarations.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => declarations.push((property.to_string(), value.to_string())),
        }
        self.set_attribute(*node, "style", &format_style(&declarations));
    }

    fn class_name(&self, node: &NodeId) -> String {
        self.attribute(*node, "class").unwrap_or_default().to_string()
    }

    fn set_class_name(&mut self, node: &NodeId, class_name: &str) {
        self.set_attribute(*node, "class", class_name);
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let parsed = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("Invalid selector '{}': {:?}", selector, err);
                return None;
            }
        };

        let root = ElementRef::wrap(self.html.tree.get(self.root)?)?;
        root.select(&parsed).next().map(|element| element.id())
    }
}

fn html_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(local))
}

fn attribute(name: &str, value: &str) -> Attribute {
    Attribute {
        name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
        value: StrTendril::from(value),
    }
}

fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn format_style(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}
