//! Document tree backends
//!
//! The splitter never talks to a concrete document. It works through the
//! [`DomTree`] trait, which the live browser DOM ([`WebTree`]) and the
//! in-memory arena ([`Fragment`]) both implement.
//!
//! # Module Structure
//!
//! - `fragment`: HTML fragment parsed with scraper, used natively and in tests
//! - `web`: adapter over `web_sys::Document`

pub mod fragment;
pub mod web;

pub use fragment::{Fragment, NodeId};
pub use web::WebTree;

/// Minimal document-tree interface needed to rebuild a subtree
///
/// Node handles are cheap to clone and stay valid while the tree lives.
/// Implementations create detached nodes; they become part of the document
/// only once passed to [`DomTree::replace_children`].
pub trait DomTree {
    type Node: Clone;

    /// Immediate children in document order
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Whether the node is a text leaf
    fn is_text(&self, node: &Self::Node) -> bool;

    /// Text of a text leaf; empty for anything else
    fn text_value(&self, node: &Self::Node) -> String;

    /// Concatenated text of the node and all its descendants
    fn text_content(&self, node: &Self::Node) -> String;

    /// Remove every child of `container`, then append `children` in order
    ///
    /// A child currently attached elsewhere is moved.
    fn replace_children(&mut self, container: &Self::Node, children: &[Self::Node]);

    fn create_element(&mut self, tag: &str) -> Self::Node;

    fn create_text(&mut self, text: &str) -> Self::Node;

    /// Replace the node's content with a single text run
    fn set_text_content(&mut self, node: &Self::Node, text: &str);

    /// Set one inline style property
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    fn class_name(&self, node: &Self::Node) -> String;

    fn set_class_name(&mut self, node: &Self::Node, class_name: &str);

    /// First element in document order matching `selector`
    fn query_selector(&self, selector: &str) -> Option<Self::Node>;
}
