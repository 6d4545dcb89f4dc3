//! Topic trees as found in XMind's `content.json`.
//!
//! [`Topic`] is the raw shape read from the source document: labels may be a
//! bare value or an array of anything. [`NormalizedTopic`] is what the rest
//! of the crate consumes, with labels flattened to plain strings.

mod normalize;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use normalize::{normalize_labels, normalize_topic};

/// Relation kind holding a topic's regular (non-floating) sub-topics.
pub const ATTACHED: &str = "attached";

/// A topic as read from the source outline.
///
/// Fields the crate does not interpret (`id`, `structureClass`, `style`, ...)
/// are kept in `extra` so they survive a round trip through an archive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<BTreeMap<String, Vec<Topic>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A topic whose labels have been flattened to a list of strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTopic {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<BTreeMap<String, Vec<NormalizedTopic>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Topic {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_labels(mut self, labels: Value) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_child(mut self, child: Topic) -> Self {
        self.children
            .get_or_insert_with(BTreeMap::new)
            .entry(ATTACHED.to_string())
            .or_default()
            .push(child);
        self
    }

    /// Attached sub-topics, in authored order.
    pub fn attached(&self) -> &[Topic] {
        self.children
            .as_ref()
            .and_then(|children| children.get(ATTACHED))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Normalize this topic and all of its descendants.
    pub fn normalize(&self) -> NormalizedTopic {
        normalize_topic(self)
    }
}

impl NormalizedTopic {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.get_or_insert_with(Vec::new).push(label.into());
        self
    }

    pub fn with_child(mut self, child: NormalizedTopic) -> Self {
        self.children
            .get_or_insert_with(BTreeMap::new)
            .entry(ATTACHED.to_string())
            .or_default()
            .push(child);
        self
    }

    /// Attached sub-topics, in authored order.
    pub fn attached(&self) -> &[NormalizedTopic] {
        self.children
            .as_ref()
            .and_then(|children| children.get(ATTACHED))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Label texts, in authored order.
    pub fn labels(&self) -> &[String] {
        self.labels.as_deref().unwrap_or(&[])
    }
}
