//! Live browser DOM backend
//!
//! Wraps a `web_sys::Document` so the splitter can rebuild real elements in
//! place. Node handles are `web_sys::Node` references; cloning one clones the
//! JS reference, not the node.

use super::DomTree;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

pub struct WebTree {
    document: Document,
}

impl WebTree {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Tree over `window.document`, if running in a window context
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl DomTree for WebTree {
    type Node = Node;

    fn children(&self, node: &Node) -> Vec<Node> {
        let list = node.child_nodes();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn is_text(&self, node: &Node) -> bool {
        node.node_type() == Node::TEXT_NODE
    }

    fn text_value(&self, node: &Node) -> String {
        if self.is_text(node) {
            node.node_value().unwrap_or_default()
        } else {
            String::new()
        }
    }

    fn text_content(&self, node: &Node) -> String {
        node.text_content().unwrap_or_default()
    }

    fn replace_children(&mut self, container: &Node, children: &[Node]) {
        // Comments and other non-element nodes cannot hold children
        let Some(element) = container.dyn_ref::<Element>() else {
            return;
        };

        element.set_inner_html("");
        for child in children {
            if let Err(err) = element.append_child(child) {
                log::warn!("Failed to append child: {:?}", err);
            }
        }
    }

    fn create_element(&mut self, tag: &str) -> Node {
        match self.document.create_element(tag) {
            Ok(element) => element.into(),
            Err(err) => {
                log::error!("Failed to create <{}>: {:?}", tag, err);
                self.document.create_text_node("").into()
            }
        }
    }

    fn create_text(&mut self, text: &str) -> Node {
        self.document.create_text_node(text).into()
    }

    fn set_text_content(&mut self, node: &Node, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_style(&mut self, node: &Node, property: &str, value: &str) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };

        if let Err(err) = element.style().set_property(property, value) {
            log::warn!("Failed to set style {}: {:?}", property, err);
        }
    }

    fn class_name(&self, node: &Node) -> String {
        node.dyn_ref::<Element>()
            .map(Element::class_name)
            .unwrap_or_default()
    }

    fn set_class_name(&mut self, node: &Node, class_name: &str) {
        if let Some(element) = node.dyn_ref::<Element>() {
            element.set_class_name(class_name);
        }
    }

    fn query_selector(&self, selector: &str) -> Option<Node> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(Node::from),
            Err(err) => {
                log::warn!("Invalid selector '{}': {:?}", selector, err);
                None
            }
        }
    }
}
