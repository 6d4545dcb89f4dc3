//! Semantic nodes → nested lines.
//!
//! Rendering decides two things: where blank lines go between siblings,
//! and which lines sit one indentation level deeper. Only list items nest
//! their children; every other node splices its children's lines into its
//! own level. No I/O is performed here; see [`super::flatten`] for turning
//! the result into text.

use super::node::GraphNode;

const CODE_FENCE: &str = "```";

/// Lines to print, grouped by indentation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Line(String),
    /// A group printed one level deeper than its parent.
    Block(Vec<RenderNode>),
}

impl RenderNode {
    fn blank() -> Self {
        RenderNode::Line(String::new())
    }
}

impl From<&str> for RenderNode {
    fn from(line: &str) -> Self {
        RenderNode::Line(line.to_string())
    }
}

impl From<String> for RenderNode {
    fn from(line: String) -> Self {
        RenderNode::Line(line)
    }
}

/// Context threaded down the render recursion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Depth of the next heading; `None` means top level.
    pub heading_level: Option<usize>,
}

impl RenderState {
    fn current_heading_level(self) -> usize {
        self.heading_level.unwrap_or(1)
    }

    fn below_heading(self, level: usize) -> Self {
        Self {
            heading_level: Some(level + 1),
        }
    }
}

/// Render a list of siblings, inserting blank separator lines.
pub fn render(nodes: &[GraphNode], state: RenderState) -> Vec<RenderNode> {
    let mut out = Vec::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 && needs_separator(&nodes[i - 1], node) {
            out.push(RenderNode::blank());
        }
        out.extend(render_one(node, state));
    }
    out
}

/// Whether a blank line goes between `prev` and `cur`.
///
/// Runs of plain text and runs of same-kind list items stay tight;
/// everything else is separated.
fn needs_separator(prev: &GraphNode, cur: &GraphNode) -> bool {
    match (prev.is_plain_text(), cur.is_plain_text()) {
        (true, true) => false,
        (true, false) | (false, true) => true,
        (false, false) => match (prev.list_kind(), cur.list_kind()) {
            (Some(prev_ordered), Some(cur_ordered)) => prev_ordered != cur_ordered,
            _ => true,
        },
    }
}

/// Render one node into lines to be spliced at the caller's level.
pub fn render_one(node: &GraphNode, state: RenderState) -> Vec<RenderNode> {
    match node {
        GraphNode::PlainText { text } => vec![text.as_str().into()],
        GraphNode::Section { content, children } => {
            let mut out: Vec<RenderNode> = vec![content.as_str().into()];
            out.extend(render(children, state));
            out
        }
        GraphNode::Element {
            tag_name,
            opening_tag,
            children,
        } => {
            let mut out: Vec<RenderNode> = vec![opening_tag.as_str().into()];
            out.extend(render(children, state));
            out.push(format!("</{tag_name}>").into());
            out
        }
        GraphNode::CodeBlock {
            opening_tag,
            children,
        } => {
            let mut out: Vec<RenderNode> = vec![opening_tag.as_str().into()];
            out.extend(render(children, state));
            out.push(CODE_FENCE.into());
            out
        }
        GraphNode::ListItem {
            index,
            content,
            children,
        } => {
            let marker = match index {
                Some(index) => format!("{index}."),
                None => "-".to_string(),
            };
            vec![
                format!("{marker} {content}").into(),
                RenderNode::Block(render(children, state)),
            ]
        }
        GraphNode::Heading { content, children } => {
            let level = state.current_heading_level();
            let mut out: Vec<RenderNode> = vec![
                format!("{} {content}", "#".repeat(level)).into(),
                RenderNode::blank(),
            ];
            out.extend(render(children, state.below_heading(level)));
            out
        }
    }
}
