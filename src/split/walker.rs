//! Recursive subtree reconstruction

use super::nodes::replace_content_of;
use super::segmenter::{segment, Collected, Piece};
use crate::options::SplitConfig;
use crate::tree::DomTree;

/// Rebuild the children of `node`, returning its new child list
///
/// Text children are expanded in place into units (delimiters become text
/// nodes holding the word delimiter). Element children are rebuilt
/// recursively and kept. Order follows the original children.
pub fn walk<T: DomTree>(
    tree: &mut T,
    node: &T::Node,
    config: &SplitConfig,
    collected: &mut Collected<T::Node>,
) -> Vec<T::Node> {
    let mut elements = Vec::new();

    for child in tree.children(node) {
        if tree.is_text(&child) {
            let text = tree.text_value(&child);
            for piece in segment(tree, &text, config, collected) {
                match piece {
                    Piece::Unit(unit) => elements.push(unit),
                    Piece::Delimiter => elements.push(tree.create_text(&config.word_delimiter)),
                }
            }
            continue;
        }

        let children = walk(tree, &child, config, collected);
        replace_content_of(tree, &child, &children);
        elements.push(child);
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Fragment;

    #[test]
    fn test_walk_preserves_inline_elements_in_order() {
        let mut fragment = Fragment::parse("<p>ab <em>cd</em> ef</p>");
        let p = fragment.query_selector("p").unwrap();
        let mut collected = Collected::default();

        let elements = walk(&mut fragment, &p, &SplitConfig::default(), &mut collected);

        let tags: Vec<Option<&str>> = elements.iter().map(|id| fragment.tag_name(*id)).collect();
        assert_eq!(
            tags,
            vec![Some("div"), None, Some("div"), Some("em"), Some("div"), None, Some("div")]
        );

        let em = elements[3];
        let em_children = fragment.children(&em);
        assert_eq!(em_children.len(), 1);
        assert_eq!(fragment.text_content(&em_children[0]), "cd");
    }

    #[test]
    fn test_walk_keeps_empty_elements() {
        let mut fragment = Fragment::parse("<p>a<br>b</p>");
        let p = fragment.query_selector("p").unwrap();
        let mut collected = Collected::default();

        let elements = walk(&mut fragment, &p, &SplitConfig::default(), &mut collected);

        assert_eq!(elements.len(), 3);
        assert_eq!(fragment.tag_name(elements[1]), Some("br"));
        assert_eq!(collected.chars.len(), 2);
    }
}
