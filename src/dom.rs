//! Read-only document tree capability the extractor runs against.
//!
//! The locators only ever ask for tags, attributes, children, parents,
//! following siblings and text, so any HTML parser can back them by
//! implementing [`DomNode`]. See `html.rs` for the rcdom implementation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADING_TAG: Regex = Regex::new(r"^h([1-6])$").unwrap();
}

pub trait DomNode: Clone {
    /// Lowercase element name; `None` for text, comments and the document root.
    fn tag(&self) -> Option<String>;

    fn attr(&self, name: &str) -> Option<String>;

    /// All child nodes in document order, text nodes included.
    fn children(&self) -> Vec<Self>;

    fn parent(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;

    /// Every node after this one under the same parent, in document order.
    fn following_siblings(&self) -> Vec<Self> {
        let mut siblings = Vec::new();
        let mut current = self.next_sibling();
        while let Some(node) = current {
            current = node.next_sibling();
            siblings.push(node);
        }
        siblings
    }

    /// Descendant text nodes in document order, unmodified.
    fn text_fragments(&self) -> Vec<String>;

    fn text(&self) -> String {
        self.text_fragments().concat()
    }

    fn is_element(&self, name: &str) -> bool {
        self.tag().as_deref() == Some(name)
    }

    fn element_children(&self) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(|child| child.tag().is_some())
            .collect()
    }

    fn next_element_sibling(&self) -> Option<Self> {
        let mut current = self.next_sibling();
        while let Some(node) = current {
            if node.tag().is_some() {
                return Some(node);
            }
            current = node.next_sibling();
        }
        None
    }

    fn following_element_siblings(&self) -> Vec<Self> {
        self.following_siblings()
            .into_iter()
            .filter(|node| node.tag().is_some())
            .collect()
    }

    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|value| value.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

/// Pre-order search of `node`'s subtree, `node` itself included.
pub fn find_first<N, F>(node: &N, predicate: &F) -> Option<N>
where
    N: DomNode,
    F: Fn(&N) -> bool,
{
    if predicate(node) {
        return Some(node.clone());
    }
    node.children()
        .iter()
        .find_map(|child| find_first(child, predicate))
}

/// Level of an `h1`..`h6` element.
pub fn heading_element_level(node: &impl DomNode) -> Option<usize> {
    let tag = node.tag()?;
    let cap = HEADING_TAG.captures(&tag)?;
    cap[1].parse().ok()
}

/// Wrapper `div` newer page markup puts around each heading.
pub fn is_heading_wrapper(node: &impl DomNode) -> bool {
    node.is_element("div")
        && node
            .attr("class")
            .map(|class| class.contains("mw-heading"))
            .unwrap_or(false)
}

/// Level of a heading element or of a heading wrapper, `None` for anything else.
pub fn heading_level<N: DomNode>(node: &N) -> Option<usize> {
    if let Some(level) = heading_element_level(node) {
        return Some(level);
    }
    if is_heading_wrapper(node) {
        return node
            .element_children()
            .iter()
            .find_map(|child| heading_element_level(child));
    }
    None
}
