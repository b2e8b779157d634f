//! Telegraph content nodes.
//!
//! Telegraph does not take raw HTML: page content is a JSON array where each
//! item is either a text string or `{tag, attrs, children}`. Tag names are
//! carried over verbatim; Telegraph only knows `href` and `src`, so other
//! attributes are dropped.

use regex::Regex;
use scraper::{ElementRef, Html};
use serde::Serialize;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(NodeElement),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeElement {
    pub tag: String,
    #[serde(skip_serializing_if = "NodeAttrs::is_empty")]
    pub attrs: NodeAttrs,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl NodeAttrs {
    pub fn is_empty(&self) -> bool {
        self.href.is_none() && self.src.is_none()
    }
}

/// Convert an HTML fragment into Telegraph nodes. Whitespace runs collapse
/// to a single space outside `pre`; whitespace-only text between top-level
/// blocks is dropped.
pub fn html_to_nodes(markup: &str) -> Vec<Node> {
    let fragment = Html::parse_fragment(markup);

    children_to_nodes(fragment.root_element(), false)
        .into_iter()
        .filter(|node| !matches!(node, Node::Text(text) if text.trim().is_empty()))
        .collect()
}

fn children_to_nodes(parent: ElementRef<'_>, preformatted: bool) -> Vec<Node> {
    let mut nodes = Vec::new();

    for child in parent.children() {
        if let Some(text) = child.value().as_text() {
            let text: &str = text;
            let text = if preformatted {
                text.to_string()
            } else {
                WHITESPACE_RUN.replace_all(text, " ").into_owned()
            };
            if !text.is_empty() {
                nodes.push(Node::Text(text));
            }
        } else if let Some(element) = ElementRef::wrap(child) {
            nodes.push(element_to_node(element, preformatted));
        }
    }

    nodes
}

fn element_to_node(element: ElementRef<'_>, preformatted: bool) -> Node {
    let value = element.value();
    let tag = value.name().to_string();
    let preformatted = preformatted || tag == "pre";

    Node::Element(NodeElement {
        attrs: NodeAttrs {
            href: value.attr("href").map(str::to_string),
            src: value.attr("src").map(str::to_string),
        },
        children: children_to_nodes(element, preformatted),
        tag,
    })
}
