use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use roxmltree::{Node, NodeType};
use serde::Serialize;

use crate::error::MarkupError;

/// Tag name of the synthetic element wrapping the parsed markup.
pub const ROOT_TAG: &str = "div";

/// A child of an [`HtmlElement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HtmlNode {
    Element(HtmlElement),
    Text { text: String },
}

/// An element of sanitized markup. Tag names are lowercase and attributes
/// are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlElement {
    pub tag_name: String,
    pub children: Vec<HtmlNode>,
}

impl HtmlElement {
    pub fn new(tag_name: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag_name: tag_name.into(),
            children,
        }
    }

    /// All descendant text, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &HtmlElement> {
        self.children.iter().filter_map(|child| match child {
            HtmlNode::Element(el) => Some(el),
            HtmlNode::Text { .. } => None,
        })
    }
}

fn collect_text(nodes: &[HtmlNode], out: &mut String) {
    for node in nodes {
        match node {
            HtmlNode::Text { text } => out.push_str(text),
            HtmlNode::Element(el) => collect_text(&el.children, out),
        }
    }
}

/// Parses sanitized markup into a tree rooted at a synthetic
/// [`ROOT_TAG`] element.
///
/// `<br>` is the only void element in the allow-list and is closed before
/// parsing. Anything else that is not well-formed (unclosed or mismatched
/// tags, unquoted attributes, unknown entities) is an error.
pub fn parse_elements(sanitized_html: &str) -> Result<HtmlElement, MarkupError> {
    let source = format!(
        "<{ROOT_TAG}>{}</{ROOT_TAG}>",
        close_void_elements(sanitized_html)
    );
    let doc = roxmltree::Document::parse(&source)?;
    Ok(convert(doc.root_element()))
}

fn close_void_elements(html: &str) -> Cow<'_, str> {
    static BR: OnceLock<Regex> = OnceLock::new();
    BR.get_or_init(|| Regex::new(r"(?i)<br\b[^>]*>").expect("Invalid br regex"))
        .replace_all(html, "<br/>")
}

fn convert(node: Node<'_, '_>) -> HtmlElement {
    let children = node
        .children()
        .filter_map(|child| match child.node_type() {
            NodeType::Element => Some(HtmlNode::Element(convert(child))),
            NodeType::Text => child.text().map(|text| HtmlNode::Text {
                text: text.to_string(),
            }),
            _ => None,
        })
        .collect();

    HtmlElement::new(node.tag_name().name().to_ascii_lowercase(), children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> HtmlNode {
        HtmlNode::Text { text: s.into() }
    }

    #[test]
    fn wraps_in_root_element() {
        let root = parse_elements("<b>bold</b> tail").unwrap();
        assert_eq!(
            root,
            HtmlElement::new(
                ROOT_TAG,
                vec![
                    HtmlNode::Element(HtmlElement::new("b", vec![text("bold")])),
                    text(" tail"),
                ]
            )
        );
    }

    #[test]
    fn tag_names_are_lowercased_and_attributes_dropped() {
        let root = parse_elements("<P class=\"x\">hi</P>").unwrap();
        let p = root.elements().next().unwrap();
        assert_eq!(p.tag_name, "p");
        assert_eq!(p.text_content(), "hi");
    }

    #[test]
    fn bare_br_is_accepted() {
        let root = parse_elements("a<br>b<BR/>c").unwrap();
        let names: Vec<_> = root.elements().map(|el| el.tag_name.as_str()).collect();
        assert_eq!(names, vec!["br", "br"]);
        assert_eq!(root.text_content(), "abc");
    }

    #[test]
    fn text_content_is_recursive() {
        let root = parse_elements("<ul><li>one</li><li><b>two</b></li></ul>").unwrap();
        assert_eq!(root.text_content(), "onetwo");
    }

    #[test]
    fn xml_entities_are_decoded() {
        let root = parse_elements("a &amp; b &lt;c&gt;").unwrap();
        assert_eq!(root.text_content(), "a & b <c>");
    }

    #[test]
    fn unclosed_tag_is_an_error() {
        let err = parse_elements("<b>bold").unwrap_err();
        assert!(matches!(err, MarkupError::Html { .. }));
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        assert!(parse_elements("<b><i>x</b></i>").is_err());
    }
}
