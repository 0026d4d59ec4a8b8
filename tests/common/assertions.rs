//! Assertions over descriptors and markup trees

use jsx_distill::{MarkupNode, PropDescriptor};

/// Assert the prop list as `(name, type, required)` triples
pub fn assert_props(actual: &[PropDescriptor], expected: &[(&str, &str, bool)]) {
    let actual: Vec<(&str, &str, bool)> = actual
        .iter()
        .map(|p| (p.name.as_str(), p.prop_type.as_str(), p.required))
        .collect();
    assert_eq!(actual, expected, "prop list mismatch");
}

/// Assert the `type` tags of a node's direct children
pub fn assert_child_tags(node: &MarkupNode, expected: &[&str]) {
    let tags: Vec<&str> = node.children().iter().map(|c| c.type_tag()).collect();
    assert_eq!(tags, expected, "children of <{}>", node.type_tag());
}

/// Assert that no text node anywhere in the tree is blank or untrimmed
pub fn assert_no_blank_text(node: &MarkupNode) {
    if let MarkupNode::Text { content } = node {
        assert!(!content.trim().is_empty(), "blank text node");
        assert_eq!(content.trim(), content, "untrimmed text node");
    }
    if let MarkupNode::Mapping(mapping) = node {
        assert_no_blank_text(&mapping.template);
    }
    for child in node.children() {
        assert_no_blank_text(child);
    }
}
