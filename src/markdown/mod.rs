//! Pure markdown generation from topic trees.
//!
//! The conversion runs in four stages, each a pure function over the
//! previous stage's output:
//!
//! - [`classify`]: topics → [`GraphNode`]s, inferring each topic's role from
//!   its title and applying the transforms named by its labels
//! - [`render`]: nodes → nested [`RenderNode`] lines with blank-line spacing
//! - [`flatten`]: nested lines → indented text lines
//! - [`generate_markdown`]: all of the above, joined with newlines
//!
//! ## Title conventions
//!
//! | Title | Becomes |
//! |---|---|
//! | `// anything` | nothing; its children take its place |
//! | `<tag ...>` | the tag, children, then `</tag>` |
//! | ```` ```lang ```` | a fenced code block around the children |
//! | `- x`, `* x`, `3. x` | a list item; children are indented beneath it |
//! | `# x` | a heading, one level deeper per enclosing heading |
//!
//! Anything else is a paragraph line. A topic with a single one-line plain
//! child is written on one line with that child.
//!
//! The export layer ([`crate::export`]) handles I/O orchestration, calling
//! these pure functions to generate content.

mod classify;
mod flatten;
mod node;
mod render;
mod transform;

pub use classify::classify;
pub use flatten::flatten;
pub use node::GraphNode;
pub use render::{RenderNode, RenderState, render, render_one};
pub use transform::{Transform, apply_transforms, compact_string};

use crate::topic::NormalizedTopic;

/// Convert a topic tree to an indented markdown-like document.
///
/// # Examples
///
/// ```
/// use mindmark::markdown::generate_markdown;
/// use mindmark::topic::NormalizedTopic;
///
/// let topic = NormalizedTopic::new("# Notes")
///     .with_child(NormalizedTopic::new("- milk"))
///     .with_child(NormalizedTopic::new("- eggs"));
///
/// assert_eq!(generate_markdown(&topic), "# Notes\n\n- milk\n- eggs");
/// ```
pub fn generate_markdown(topic: &NormalizedTopic) -> String {
    let nodes = classify(topic);
    let tree = RenderNode::Block(render(&nodes, RenderState::default()));
    flatten(&tree).join("\n")
}
