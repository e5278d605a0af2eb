//! `DomNode` backed by html5ever's reference-counted DOM.

use crate::dom::DomNode;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::rc::Rc;

/// A parsed page. Owns the DOM for the duration of one word's lookup.
pub struct HtmlDocument {
    dom: RcDom,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);
        HtmlDocument { dom }
    }

    pub fn root(&self) -> HtmlNode {
        HtmlNode(self.dom.document.clone())
    }
}

#[derive(Clone)]
pub struct HtmlNode(Handle);

impl HtmlNode {
    fn parent_handle(&self) -> Option<Handle> {
        // rcdom keeps the parent in a Cell, so take it out and put it back
        let weak = self.0.parent.take();
        let parent = weak.as_ref().and_then(|w| w.upgrade());
        self.0.parent.set(weak);
        parent
    }
}

impl DomNode for HtmlNode {
    fn tag(&self) -> Option<String> {
        match &self.0.data {
            NodeData::Element { name, .. } => Some(name.local.to_string().to_ascii_lowercase()),
            _ => None,
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        match &self.0.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|a| a.name.local.as_ref().eq_ignore_ascii_case(name))
                .map(|a| a.value.to_string()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .children
            .borrow()
            .iter()
            .cloned()
            .map(HtmlNode)
            .collect()
    }

    fn parent(&self) -> Option<Self> {
        self.parent_handle().map(HtmlNode)
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent_handle()?;
        let siblings = parent.children.borrow();
        let index = siblings.iter().position(|s| Rc::ptr_eq(s, &self.0))?;
        siblings.get(index + 1).cloned().map(HtmlNode)
    }

    fn following_siblings(&self) -> Vec<Self> {
        let Some(parent) = self.parent_handle() else {
            return Vec::new();
        };
        let siblings = parent.children.borrow();
        match siblings.iter().position(|s| Rc::ptr_eq(s, &self.0)) {
            Some(index) => siblings[index + 1..].iter().cloned().map(HtmlNode).collect(),
            None => Vec::new(),
        }
    }

    fn text_fragments(&self) -> Vec<String> {
        fn collect(node: &Handle, out: &mut Vec<String>) {
            match &node.data {
                NodeData::Text { contents } => out.push(contents.borrow().to_string()),
                NodeData::Element { .. } | NodeData::Document => {
                    for child in node.children.borrow().iter() {
                        collect(child, out);
                    }
                }
                _ => {}
            }
        }

        let mut out = Vec::new();
        collect(&self.0, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{find_first, heading_level};

    fn first(doc: &HtmlDocument, tag: &str) -> HtmlNode {
        find_first(&doc.root(), &|n: &HtmlNode| n.is_element(tag)).unwrap()
    }

    #[test]
    fn reads_tags_attributes_and_text() {
        let doc = HtmlDocument::parse(
            r#"<h2 id="Finnish"><span class="mw-headline">Finnish</span><span>[edit]</span></h2>"#,
        );
        let h2 = first(&doc, "h2");
        assert_eq!(h2.attr("id").as_deref(), Some("Finnish"));
        assert_eq!(h2.text(), "Finnish[edit]");
        assert_eq!(h2.text_fragments(), vec!["Finnish", "[edit]"]);
        assert!(first(&doc, "span").has_class("mw-headline"));
    }

    #[test]
    fn walks_siblings_and_parents() {
        let doc = HtmlDocument::parse("<body><h2>A</h2>\n<p>x</p><h3>B</h3></body>");
        let h2 = first(&doc, "h2");
        let p = h2.next_element_sibling().unwrap();
        assert!(p.is_element("p"));
        assert!(p.next_element_sibling().unwrap().is_element("h3"));
        assert!(p.parent().unwrap().is_element("body"));
        assert_eq!(heading_level(&h2), Some(2));
        assert_eq!(heading_level(&p), None);
    }

    #[test]
    fn attribute_names_match_any_case() {
        let doc = HtmlDocument::parse(r#"<table><tr><td rowspan="2">x</td></tr></table>"#);
        let td = first(&doc, "td");
        assert_eq!(td.attr("ROWSPAN").as_deref(), Some("2"));
        assert_eq!(td.attr("colspan"), None);
    }

    #[test]
    fn following_siblings_come_from_one_parent_scan() {
        let doc = HtmlDocument::parse("<body><h2>A</h2>text<p>x</p><!-- c --><h3>B</h3></body>");
        let h2 = first(&doc, "h2");
        assert_eq!(h2.following_siblings().len(), 4);
        let tags: Vec<_> = h2
            .following_element_siblings()
            .iter()
            .map(|n| n.tag().unwrap())
            .collect();
        assert_eq!(tags, vec!["p", "h3"]);
        let h3 = first(&doc, "h3");
        assert!(h3.following_siblings().is_empty());
        assert!(doc.root().following_siblings().is_empty());
    }

    #[test]
    fn walks_long_sibling_runs() {
        let mut html = String::from("<body><h2>start</h2>");
        for i in 0..2000 {
            html.push_str(&format!("<p>{}</p>", i));
        }
        html.push_str("</body>");
        let doc = HtmlDocument::parse(&html);
        let h2 = first(&doc, "h2");
        let last = h2.following_element_siblings().pop().unwrap();
        assert_eq!(last.text(), "1999");
    }

    #[test]
    fn heading_wrapper_reports_inner_level() {
        let doc = HtmlDocument::parse(
            r#"<div class="mw-heading mw-heading3"><h3 id="Noun">Noun</h3><span>edit</span></div>"#,
        );
        let wrapper = first(&doc, "div");
        assert_eq!(heading_level(&wrapper), Some(3));
    }
}
