//! Label normalization.
//!
//! XMind files in the wild carry labels as an array of strings, an array of
//! `{ "text": ... }` objects, or a single bare value. Everything downstream
//! wants a flat `Vec<String>`.

use log::debug;
use serde_json::Value;

use super::{NormalizedTopic, Topic};

/// Normalize a topic tree, flattening labels at every level.
///
/// Children of every relation kind are normalized, not just attached ones,
/// so the result can be written back to an archive without losing
/// floating or summary topics.
pub fn normalize_topic(topic: &Topic) -> NormalizedTopic {
    let labels = topic.labels.as_ref().and_then(normalize_labels);
    let children = topic.children.as_ref().map(|children| {
        children
            .iter()
            .map(|(kind, list)| (kind.clone(), list.iter().map(normalize_topic).collect()))
            .collect()
    });

    NormalizedTopic {
        title: topic.title.clone(),
        labels,
        children,
        extra: topic.extra.clone(),
    }
}

/// Flatten a raw label value into label texts.
///
/// Returns `None` for `null`. A non-array value is treated as a
/// one-element array. Scalars are coerced to their textual form; entries
/// with no usable text are dropped.
///
/// # Examples
///
/// ```
/// use mindmark::topic::normalize_labels;
/// use serde_json::json;
///
/// assert_eq!(
///     normalize_labels(&json!([{ "text": "compact" }, "other", 3])),
///     Some(vec!["compact".to_string(), "other".to_string(), "3".to_string()])
/// );
/// assert_eq!(normalize_labels(&json!("compact")), Some(vec!["compact".to_string()]));
/// assert_eq!(normalize_labels(&json!(null)), None);
/// ```
pub fn normalize_labels(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(items.iter().filter_map(label_text).collect()),
        other => Some(label_text(other).into_iter().collect()),
    }
}

fn label_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Object(fields) => match fields.get("text") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Number(number)) => Some(number.to_string()),
            _ => {
                debug!(label:% = value; "Dropping label without text");
                None
            }
        },
        Value::Null | Value::Array(_) => {
            debug!(label:% = value; "Dropping unusable label");
            None
        }
    }
}
