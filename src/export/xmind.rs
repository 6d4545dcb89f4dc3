//! XMind Exporter - packages topic trees as `.xmind` archives.

use std::io::{Seek, Write};

use crate::error::Result;
use crate::topic::Topic;
use crate::xmind::{XMindConfig, write_xmind_to_writer};

use super::Exporter;

/// Exporter for XMind archives.
#[derive(Debug, Clone, Default)]
pub struct XMindExporter {
    config: XMindConfig,
}

impl XMindExporter {
    /// Create a new XMindExporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an XMindExporter with the specified configuration.
    pub fn with_config(config: XMindConfig) -> Self {
        Self { config }
    }
}

impl Exporter for XMindExporter {
    fn export<W: Write + Seek>(&self, topic: &Topic, writer: &mut W) -> Result<()> {
        write_xmind_to_writer(topic, writer, &self.config)
    }
}
