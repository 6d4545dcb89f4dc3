//! Markdown Exporter - converts topic trees to indented Markdown.

use std::io::{Seek, Write};

use log::debug;

use crate::error::Result;
use crate::markdown::generate_markdown;
use crate::topic::Topic;

use super::Exporter;

/// Exporter for Markdown output.
#[derive(Debug, Clone, Default)]
pub struct MarkdownExporter {
    trailing_newline: bool,
}

impl MarkdownExporter {
    /// Create a new MarkdownExporter that writes the document as generated.
    pub fn new() -> Self {
        Self::default()
    }

    /// End the output with a newline, as files on disk usually do.
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write + Seek>(&self, topic: &Topic, writer: &mut W) -> Result<()> {
        let document = generate_markdown(&topic.normalize());
        debug!(bytes = document.len(); "Generated markdown");

        writer.write_all(document.as_bytes())?;
        if self.trailing_newline {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}
