//! Unit construction and content replacement

use crate::classes::add_class;
use crate::options::WrapperTag;
use crate::tree::DomTree;

/// Inline style applied to every unit so transforms can offset it independently
pub const UNIT_STYLE: &[(&str, &str)] = &[("display", "inline-block"), ("position", "relative")];

/// Create one wrapper unit holding `text`
pub fn create_unit<T: DomTree>(
    tree: &mut T,
    tag: WrapperTag,
    text: &str,
    class_name: Option<&str>,
) -> T::Node {
    let node = tree.create_element(tag.as_str());
    tree.set_text_content(&node, text);

    for (property, value) in UNIT_STYLE {
        tree.set_style(&node, property, value);
    }

    if class_name.is_some() {
        let classes = add_class(&tree.class_name(&node), class_name);
        tree.set_class_name(&node, &classes);
    }

    node
}

/// Replace every child of `container` with `children`, in order
pub fn replace_content_of<T: DomTree>(tree: &mut T, container: &T::Node, children: &[T::Node]) {
    tree.replace_children(container, children);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Fragment;

    #[test]
    fn test_create_unit_markup() {
        let mut fragment = Fragment::new();
        let unit = create_unit(&mut fragment, WrapperTag::Span, "a", Some(".char letter"));
        assert_eq!(
            fragment.outer_markup(unit),
            r#"<span style="display: inline-block; position: relative;" class="char letter">a</span>"#
        );
    }

    #[test]
    fn test_create_unit_without_class() {
        let mut fragment = Fragment::new();
        let unit = create_unit(&mut fragment, WrapperTag::Div, "word", None);
        assert_eq!(fragment.attribute(unit, "class"), None);
        assert_eq!(fragment.text_content(&unit), "word");
    }

    #[test]
    fn test_create_unit_empty_text_has_no_children() {
        let mut fragment = Fragment::new();
        let unit = create_unit(&mut fragment, WrapperTag::Div, "", None);
        assert!(fragment.children(&unit).is_empty());
    }

    #[test]
    fn test_replace_content_of_is_destructive_and_ordered() {
        let mut fragment = Fragment::parse("<p>old<b>x</b></p>");
        let p = fragment.query_selector("p").unwrap();
        let first = fragment.create_text("1");
        let second = fragment.create_text("2");

        replace_content_of(&mut fragment, &p, &[first, second]);
        assert_eq!(fragment.inner_markup(p), "12");

        replace_content_of(&mut fragment, &p, &[first, second]);
        assert_eq!(fragment.inner_markup(p), "12");
    }
}
