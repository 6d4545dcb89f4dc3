//! # mindmark
//!
//! Turn mind maps into documents. Outline an article in XMind, then convert
//! the topic tree into indented Markdown, or package a topic tree back into
//! an `.xmind` archive.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mindmark::{read_xmind, generate_markdown};
//!
//! let topic = read_xmind("article.xmind").unwrap();
//! println!("{}", generate_markdown(&topic.normalize()));
//! ```
//!
//! ## Writing outlines
//!
//! A topic's title decides what it becomes: `# Title` is a heading, `- item`
//! and `1. item` are list entries, ```` ```lang ```` opens a code block,
//! `<tag>` wraps its children in a tag, and `// note` is dropped while its
//! children are kept. Labels name transforms to run over a topic; `compact`
//! joins multi-line text onto one line.
//!
//! ```
//! use mindmark::{NormalizedTopic, generate_markdown};
//!
//! let outline = NormalizedTopic::new("// draft")
//!     .with_child(
//!         NormalizedTopic::new("# Setup")
//!             .with_child(NormalizedTopic::new("Install with:"))
//!             .with_child(NormalizedTopic::new("cargo install mindmark")),
//!     )
//!     .with_child(NormalizedTopic::new("- one"))
//!     .with_child(NormalizedTopic::new("- two"));
//!
//! assert_eq!(generate_markdown(&outline), "# Setup\n\nInstall with:\ncargo install mindmark\n\n- one\n- two");
//! ```

pub mod error;
pub mod export;
pub mod markdown;
pub mod topic;
pub(crate) mod util;
pub mod xmind;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use markdown::{GraphNode, classify, generate_markdown};
pub use topic::{NormalizedTopic, Topic};
pub use xmind::{XMindConfig, read_topic_json, read_xmind, write_xmind};
