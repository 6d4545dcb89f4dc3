//! Export module for writing topic trees to various formats.
//!
//! Provides the `Exporter` trait and format-specific implementations.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write + Seek` destination
//!
//! # Example
//!
//! ```no_run
//! use mindmark::read_xmind;
//! use mindmark::export::{Exporter, MarkdownExporter};
//! use std::fs::File;
//!
//! let topic = read_xmind("notes.xmind")?;
//! let mut file = File::create("notes.md")?;
//! MarkdownExporter::new().export(&topic, &mut file)?;
//! # Ok::<(), mindmark::Error>(())
//! ```

use std::io::{Seek, Write};
use std::path::Path;

use crate::error::Result;
use crate::topic::Topic;

mod text;
mod xmind;

pub use text::MarkdownExporter;
pub use xmind::XMindExporter;

/// Trait for exporting topic trees to specific formats.
///
/// Exporters use a builder pattern where configuration is held in the struct,
/// and the `export` method writes to any `Write + Seek` destination.
pub trait Exporter {
    /// Export the topic tree to the provided writer.
    ///
    /// The writer can be:
    /// - `std::fs::File` for disk output
    /// - `std::io::Cursor<Vec<u8>>` for seekable in-memory output
    /// - Any other type implementing `Write + Seek`
    fn export<W: Write + Seek>(&self, topic: &Topic, writer: &mut W) -> Result<()>;
}

/// File formats understood at the edges of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// XMind zip archive.
    XMind,
    /// XMind `content.json`, a single sheet, or a bare topic.
    Json,
    /// Indented markdown-like text.
    Markdown,
}

impl Format {
    /// Guess the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xmind" => Some(Format::XMind),
            "json" => Some(Format::Json),
            "md" | "markdown" | "txt" => Some(Format::Markdown),
            _ => None,
        }
    }

    /// Guess an input format from its leading bytes.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"PK\x03\x04") {
            return Some(Format::XMind);
        }
        let text = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
        match text.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'[' | b'{') => Some(Format::Json),
            _ => None,
        }
    }
}
