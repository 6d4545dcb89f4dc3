use std::io::{Seek, Write};
use std::path::Path;

use log::debug;
use serde_json::{Map, Value, json};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::Sheet;
use crate::error::Result;
use crate::topic::Topic;
use crate::util::time_seed_nanos;

/// Configuration for XMind archive output.
#[derive(Debug, Clone)]
pub struct XMindConfig {
    /// Title of the single sheet written.
    pub sheet_title: String,
    /// `id` given to the root topic.
    pub root_id: String,
    /// Layout of the root topic, e.g. `org.xmind.ui.logic.right`.
    pub structure_class: String,
}

impl Default for XMindConfig {
    fn default() -> Self {
        Self {
            sheet_title: "Sheet 1".to_string(),
            root_id: "root".to_string(),
            structure_class: "org.xmind.ui.logic.right".to_string(),
        }
    }
}

impl XMindConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet_title(mut self, title: impl Into<String>) -> Self {
        self.sheet_title = title.into();
        self
    }

    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = id.into();
        self
    }

    pub fn with_structure_class(mut self, class: impl Into<String>) -> Self {
        self.structure_class = class.into();
        self
    }
}

/// Write a topic tree to an `.xmind` file on disk.
///
/// Labels are normalized before writing. The archive holds one sheet.
///
/// # Example
///
/// ```no_run
/// use mindmark::{Topic, XMindConfig, write_xmind};
///
/// let topic = Topic::new("Plans").with_child(Topic::new("- ship it"));
/// write_xmind(&topic, "plans.xmind", &XMindConfig::new())?;
/// # Ok::<(), mindmark::Error>(())
/// ```
pub fn write_xmind<P: AsRef<Path>>(topic: &Topic, path: P, config: &XMindConfig) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_xmind_to_writer(topic, file, config)
}

/// Write a topic tree as an XMind archive to any [`Write`] + [`Seek`] destination.
pub fn write_xmind_to_writer<W: Write + Seek>(
    topic: &Topic,
    writer: W,
    config: &XMindConfig,
) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut root_topic = serde_json::to_value(topic.normalize())?;
    if let Value::Object(fields) = &mut root_topic {
        fields.insert("id".into(), Value::String(config.root_id.clone()));
        fields.insert(
            "structureClass".into(),
            Value::String(config.structure_class.clone()),
        );
    }

    let sheet = Sheet {
        id: uuid_v4(),
        title: config.sheet_title.clone(),
        root_topic,
        extra: Map::new(),
    };
    let content = serde_json::to_string(&[sheet])?;

    let manifest = json!({
        "file-entries": {
            "content.json": {},
            "metadata.json": {},
        }
    });

    let entries: [(&str, String); 4] = [
        ("content.json", content),
        ("content.xml", CONTENT_XML.to_string()),
        ("manifest.json", manifest.to_string()),
        ("metadata.json", "{}".to_string()),
    ];

    for (name, data) in &entries {
        zip.start_file(*name, options)?;
        zip.write_all(data.as_bytes())?;
        debug!(name, size = data.len(); "Wrote archive entry");
    }

    zip.finish()?;
    Ok(())
}

/// Shown by XMind 8 and earlier, which only read `content.xml`.
const CONTENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<xmap-content xmlns="urn:xmind:xmap:xmlns:content:2.0" xmlns:fo="http://www.w3.org/1999/XSL/Format" xmlns:svg="http://www.w3.org/2000/svg" xmlns:xhtml="http://www.w3.org/1999/xhtml" xmlns:xlink="http://www.w3.org/1999/xlink" modified-by="mindmark" timestamp="0" version="2.0">
  <sheet id="compat-sheet" modified-by="mindmark" timestamp="0">
    <topic id="compat-root" modified-by="mindmark" structure-class="org.xmind.ui.logic.right" timestamp="0">
      <title>This file can not be opened normally, please do not modify and save it with XMind 8 or earlier.</title>
    </topic>
    <title>Sheet 1</title>
  </sheet>
</xmap-content>"#;

/// Generate a simple UUID v4 (random)
fn uuid_v4() -> String {
    // Simple PRNG for UUID generation (not cryptographically secure, but fine for identifiers)
    let mut state = time_seed_nanos();
    let mut bytes = [0u8; 16];
    for byte in &mut bytes {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        *byte = (state >> 33) as u8;
    }

    // Set version (4) and variant (2)
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
