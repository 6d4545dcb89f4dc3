//! Semantic nodes produced by classification.

use serde::Serialize;

/// One classified unit of the document.
///
/// Every variant except [`GraphNode::PlainText`] owns the already-classified
/// output of its topic's attached sub-topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GraphNode {
    /// Leaf paragraph text.
    PlainText { text: String },
    /// A line of text with content beneath it, no heading marker.
    Section {
        content: String,
        children: Vec<GraphNode>,
    },
    /// A tag span such as `<details>`; closed with `</tag_name>` on render.
    Element {
        tag_name: String,
        opening_tag: String,
        children: Vec<GraphNode>,
    },
    /// A fenced code region; closed with a bare fence on render.
    CodeBlock {
        opening_tag: String,
        children: Vec<GraphNode>,
    },
    /// A bullet (`index` is `None`) or numbered list entry.
    ListItem {
        #[serde(skip_serializing_if = "Option::is_none")]
        index: Option<String>,
        content: String,
        children: Vec<GraphNode>,
    },
    Heading {
        content: String,
        children: Vec<GraphNode>,
    },
}

impl GraphNode {
    pub fn plain(text: impl Into<String>) -> Self {
        GraphNode::PlainText { text: text.into() }
    }

    /// The variant's textual field, if it has one.
    ///
    /// `text` for plain text, `content` for sections, list items and
    /// headings. Elements and code blocks only carry tag text.
    pub fn text(&self) -> Option<&str> {
        match self {
            GraphNode::PlainText { text } => Some(text),
            GraphNode::Section { content, .. }
            | GraphNode::ListItem { content, .. }
            | GraphNode::Heading { content, .. } => Some(content),
            GraphNode::Element { .. } | GraphNode::CodeBlock { .. } => None,
        }
    }

    /// Mutable access to the field returned by [`GraphNode::text`].
    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            GraphNode::PlainText { text } => Some(text),
            GraphNode::Section { content, .. }
            | GraphNode::ListItem { content, .. }
            | GraphNode::Heading { content, .. } => Some(content),
            GraphNode::Element { .. } | GraphNode::CodeBlock { .. } => None,
        }
    }

    pub fn children(&self) -> &[GraphNode] {
        match self {
            GraphNode::PlainText { .. } => &[],
            GraphNode::Section { children, .. }
            | GraphNode::Element { children, .. }
            | GraphNode::CodeBlock { children, .. }
            | GraphNode::ListItem { children, .. }
            | GraphNode::Heading { children, .. } => children,
        }
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self, GraphNode::PlainText { .. })
    }

    /// `Some(has_index)` for list items, `None` otherwise.
    pub fn list_kind(&self) -> Option<bool> {
        match self {
            GraphNode::ListItem { index, .. } => Some(index.is_some()),
            _ => None,
        }
    }
}
