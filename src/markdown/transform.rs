//! Label-driven transforms over classified nodes.
//!
//! A topic's labels name transforms to run over that topic's classified
//! output. The set is closed; labels that name nothing here are left alone
//! so authors can tag topics freely.

use log::trace;

use super::node::GraphNode;

/// A built-in transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Collapse multi-line text onto one normalized line.
    Compact,
}

impl Transform {
    /// Look up a transform by its label text.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "compact" => Some(Transform::Compact),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Transform::Compact => "compact",
        }
    }

    pub fn apply(self, nodes: Vec<GraphNode>) -> Vec<GraphNode> {
        match self {
            Transform::Compact => compact(nodes),
        }
    }
}

/// Run the transforms named by `names` over `nodes`, in order.
pub fn apply_transforms<S: AsRef<str>>(names: &[S], nodes: Vec<GraphNode>) -> Vec<GraphNode> {
    names.iter().fold(nodes, |nodes, name| {
        let name = name.as_ref();
        match Transform::from_name(name) {
            Some(transform) => transform.apply(nodes),
            None => {
                trace!(label = name; "Ignoring label with no transform");
                nodes
            }
        }
    })
}

fn compact(nodes: Vec<GraphNode>) -> Vec<GraphNode> {
    nodes
        .into_iter()
        .map(|mut node| {
            if let Some(text) = node.text_mut() {
                *text = compact_string(text);
            }
            node
        })
        .collect()
}

/// Trim, trim every line, and join the lines with single spaces.
///
/// # Examples
///
/// ```
/// use mindmark::markdown::compact_string;
///
/// assert_eq!(compact_string("  a\nb  \n c"), "a b c");
/// ```
pub fn compact_string(text: &str) -> String {
    text.trim()
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}
