use std::fs::File;
use std::io::Read;

use mindmark::export::{Exporter, MarkdownExporter};
use mindmark::{Topic, XMindConfig, generate_markdown, read_topic_json, read_xmind, write_xmind};
use serde_json::{Value, json};
use tempfile::NamedTempFile;
use zip::ZipArchive;

const ARTICLE_JSON: &str = include_str!("fixtures/article.json");

#[test]
fn test_write_then_read_xmind() {
    let topic = read_topic_json(ARTICLE_JSON).expect("Failed to parse fixture");

    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    write_xmind(&topic, temp_file.path(), &XMindConfig::new()).expect("Failed to write XMind");

    let back = read_xmind(temp_file.path()).expect("Failed to read XMind back");
    let original = topic.normalize();
    let reread = back.normalize();

    assert_eq!(reread.title, original.title);
    assert_eq!(reread.attached().len(), original.attached().len());
    assert_eq!(reread.attached()[1].labels(), ["ignored-label"]);
    assert_eq!(generate_markdown(&reread), generate_markdown(&original));

    // Relations other than "attached" survive packaging.
    let detached = &reread.children.as_ref().unwrap()["detached"];
    assert_eq!(detached[0].title, "Floating idea");
}

#[test]
fn test_root_overrides_and_extra_fields() {
    let topic = read_topic_json(ARTICLE_JSON).expect("Failed to parse fixture");
    let config = XMindConfig::new()
        .with_sheet_title("Outline")
        .with_root_id("main")
        .with_structure_class("org.xmind.ui.map.clockwise");

    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    write_xmind(&topic, temp_file.path(), &config).expect("Failed to write XMind");

    let mut archive = ZipArchive::new(File::open(temp_file.path()).unwrap()).unwrap();
    let mut content = String::new();
    archive
        .by_name("content.json")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    let sheets: Value = serde_json::from_str(&content).unwrap();

    assert_eq!(sheets.as_array().map(Vec::len), Some(1));
    assert_eq!(sheets[0]["title"], "Outline");

    let root = &sheets[0]["rootTopic"];
    assert_eq!(root["id"], "main");
    assert_eq!(root["structureClass"], "org.xmind.ui.map.clockwise");
    assert_eq!(root["class"], "topic");

    let first = &root["children"]["attached"][0];
    assert_eq!(first["id"], "t1");
    assert_eq!(first["children"]["attached"][0]["labels"], json!(["compact"]));
}

#[test]
fn test_markdown_exporter_to_file() {
    let topic = Topic::new("# Title")
        .with_child(Topic::new("body"))
        .with_child(Topic::new("more"));

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    MarkdownExporter::new()
        .with_trailing_newline(true)
        .export(&topic, temp_file.as_file_mut())
        .expect("Failed to export");

    let written = std::fs::read_to_string(temp_file.path()).unwrap();
    assert_eq!(written, "# Title\n\nbody\nmore\n");
}

#[test]
fn test_read_missing_file() {
    let err = read_xmind("/nonexistent/outline.xmind").unwrap_err();
    assert!(matches!(err, mindmark::Error::Io(_)), "{err:?}");
}
