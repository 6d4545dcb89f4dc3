use mindmark::markdown::{RenderNode, RenderState, flatten, render};
use mindmark::{GraphNode, NormalizedTopic, classify, generate_markdown, read_topic_json};

const ARTICLE_JSON: &str = include_str!("fixtures/article.json");

const ARTICLE_MD: &[&str] = &[
    "# Getting started",
    "",
    "This tool turns outlines into documents.",
    "",
    "1. Install",
    "  ```sh",
    "  cargo install mindmark",
    "  ```",
    "2. Convert mindmark notes.xmind",
    "",
    "- tight",
    "- list",
    "",
    "<details>",
    "Hidden text",
    "</details>",
];

fn article() -> NormalizedTopic {
    read_topic_json(ARTICLE_JSON)
        .expect("Failed to parse fixture")
        .normalize()
}

#[test]
fn test_article_document() {
    let markdown = generate_markdown(&article());
    let lines: Vec<&str> = markdown.split('\n').collect();
    assert_eq!(lines, ARTICLE_MD);
}

#[test]
fn test_article_is_deterministic() {
    let topic = article();
    assert_eq!(generate_markdown(&topic), generate_markdown(&topic));
}

#[test]
fn test_article_classification() {
    let nodes = classify(&article());

    // The root is an annotation, so its two attached children surface.
    assert_eq!(nodes.len(), 2);
    assert!(matches!(nodes[0], GraphNode::Heading { .. }));
    assert!(matches!(nodes[1], GraphNode::Element { ref tag_name, .. } if tag_name == "details"));

    // Floating topics are not part of the document.
    let markdown = generate_markdown(&article());
    assert!(!markdown.contains("Floating idea"));
}

#[test]
fn test_stages_compose() {
    let topic = NormalizedTopic::new("- item")
        .with_child(NormalizedTopic::new("a"))
        .with_child(NormalizedTopic::new("b"));

    let nodes = classify(&topic);
    let tree = RenderNode::Block(render(&nodes, RenderState::default()));
    assert_eq!(flatten(&tree), ["- item", "  a", "  b"]);
    assert_eq!(generate_markdown(&topic), "- item\n  a\n  b");
}

#[test]
fn test_empty_outline() {
    assert_eq!(generate_markdown(&NormalizedTopic::new("// nothing")), "");
    assert_eq!(generate_markdown(&NormalizedTopic::new("")), "");
}

#[test]
fn test_mixed_lists_and_paragraphs() {
    let topic = NormalizedTopic::new("// doc")
        .with_child(NormalizedTopic::new("First paragraph"))
        .with_child(NormalizedTopic::new("Second line"))
        .with_child(NormalizedTopic::new("- a"))
        .with_child(NormalizedTopic::new("* b"))
        .with_child(NormalizedTopic::new("1. c"))
        .with_child(NormalizedTopic::new("2. d"))
        .with_child(NormalizedTopic::new("Closing"));

    assert_eq!(
        generate_markdown(&topic),
        "First paragraph\nSecond line\n\n- a\n- b\n\n1. c\n2. d\n\nClosing"
    );
}
