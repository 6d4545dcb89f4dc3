//! Topic → semantic node classification.
//!
//! A topic's role is inferred from its title. Children are classified
//! first, then the title is checked against two ordered rule tables: rules
//! on the raw title (tags, code fences), then rules on the content left
//! after folding a short single child onto the title line (list markers,
//! headings). Earlier rules win, so `<li>- x</li>`-like titles stay tags.

use crate::topic::NormalizedTopic;

use super::node::GraphNode;
use super::transform::apply_transforms;

/// Titles starting with this contribute only their children.
const ANNOTATION_PREFIX: &str = "//";
const CODE_FENCE: &str = "```";

/// What a rule recognized, before children are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Shape {
    Element { tag_name: String },
    CodeBlock,
    ListItem { index: Option<String>, content: String },
    Heading { content: String },
}

type Rule = fn(&str) -> Option<Shape>;

/// Checked against the topic title, before folding.
const TITLE_RULES: &[Rule] = &[match_element, match_code_fence];

/// Checked against the (possibly folded) content.
const CONTENT_RULES: &[Rule] = &[match_list_item, match_heading];

/// Classify a topic and its attached descendants.
///
/// Returns one node per topic, except for annotation topics (titles
/// starting with `//`), which are replaced by their children's nodes.
/// The topic's labels are applied as transforms to its own output.
pub fn classify(topic: &NormalizedTopic) -> Vec<GraphNode> {
    let children: Vec<GraphNode> = topic.attached().iter().flat_map(classify).collect();

    if topic.title.starts_with(ANNOTATION_PREFIX) {
        return children;
    }

    let node = classify_title(&topic.title, children);
    apply_transforms(topic.labels(), vec![node])
}

fn classify_title(title: &str, mut children: Vec<GraphNode>) -> GraphNode {
    if let Some(shape) = first_match(TITLE_RULES, title) {
        return shape.into_node(title, children);
    }

    let mut content = title.to_string();
    if let [GraphNode::PlainText { text }] = children.as_slice()
        && !text.contains('\n')
    {
        content = format!("{content} {text}");
        children.clear();
    }

    if let Some(shape) = first_match(CONTENT_RULES, &content) {
        return shape.into_node(&content, children);
    }

    if children.is_empty() {
        GraphNode::PlainText { text: content }
    } else {
        GraphNode::Section { content, children }
    }
}

fn first_match(rules: &[Rule], text: &str) -> Option<Shape> {
    rules.iter().find_map(|rule| rule(text))
}

impl Shape {
    fn into_node(self, text: &str, children: Vec<GraphNode>) -> GraphNode {
        match self {
            Shape::Element { tag_name } => GraphNode::Element {
                tag_name,
                opening_tag: text.to_string(),
                children,
            },
            Shape::CodeBlock => GraphNode::CodeBlock {
                opening_tag: text.to_string(),
                children,
            },
            Shape::ListItem { index, content } => GraphNode::ListItem {
                index,
                content,
                children,
            },
            Shape::Heading { content } => GraphNode::Heading { content, children },
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `<name ...>`: a word character after `<` and no `>` before the last one.
fn match_element(title: &str) -> Option<Shape> {
    let inner = title.strip_prefix('<')?.strip_suffix('>')?;
    if !inner.starts_with(is_word_char) || inner.contains('>') {
        return None;
    }
    let tag_name = inner.split(' ').next().unwrap_or(inner);
    Some(Shape::Element {
        tag_name: tag_name.to_string(),
    })
}

fn match_code_fence(title: &str) -> Option<Shape> {
    title.starts_with(CODE_FENCE).then_some(Shape::CodeBlock)
}

/// `12. item`, `* item` or `- item`.
fn match_list_item(content: &str) -> Option<Shape> {
    let rest = content.trim_start_matches(|c: char| c.is_ascii_digit());
    let digits = content.len() - rest.len();
    if digits > 0
        && let Some(item) = rest.strip_prefix(". ")
    {
        return Some(Shape::ListItem {
            index: Some(content[..digits].to_string()),
            content: item.trim().to_string(),
        });
    }

    ["* ", "- "].iter().find_map(|marker| {
        content.strip_prefix(marker).map(|item| Shape::ListItem {
            index: None,
            content: item.trim().to_string(),
        })
    })
}

fn match_heading(content: &str) -> Option<Shape> {
    content.strip_prefix("# ").map(|rest| Shape::Heading {
        content: rest.trim().to_string(),
    })
}
