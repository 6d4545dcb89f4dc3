//! XMind archive support.
//!
//! An `.xmind` file (XMind Zen and later) is a zip archive whose
//! `content.json` holds a list of sheets, each with a root topic.

mod reader;
mod writer;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::topic::Topic;

pub use reader::{read_topic_json, read_xmind, read_xmind_from_reader};
pub use writer::{XMindConfig, write_xmind, write_xmind_to_writer};

/// One sheet of an XMind workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet<T = Topic> {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub root_topic: T,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
