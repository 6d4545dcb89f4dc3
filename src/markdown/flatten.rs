//! Nested lines → indented text lines.

use super::render::RenderNode;

const INDENT: &str = "  ";

/// Flatten a render tree into output lines.
///
/// The outermost block contributes no indentation; each nested block adds
/// one two-space level. Lines containing newlines are split, and every
/// piece gets the indentation of the line it came from.
pub fn flatten(node: &RenderNode) -> Vec<String> {
    let mut out = Vec::new();
    flatten_into(node, -1, &mut out);
    out
}

fn flatten_into(node: &RenderNode, indent: i32, out: &mut Vec<String>) {
    match node {
        RenderNode::Block(items) => {
            for item in items {
                flatten_into(item, indent + 1, out);
            }
        }
        RenderNode::Line(text) if indent <= 0 => {
            out.extend(text.split('\n').map(str::to_string));
        }
        RenderNode::Line(text) => {
            let prefix = INDENT.repeat(indent as usize);
            out.extend(text.split('\n').map(|line| format!("{prefix}{line}")));
        }
    }
}
