use std::io::{Read, Seek};
use std::path::Path;

use log::debug;
use serde_json::Value;
use zip::ZipArchive;

use super::Sheet;
use crate::error::{Error, Result};
use crate::topic::Topic;

const CONTENT_JSON: &str = "content.json";

/// Read the root topic of the first sheet of an `.xmind` file.
///
/// # Example
///
/// ```no_run
/// use mindmark::read_xmind;
///
/// let topic = read_xmind("notes.xmind")?;
/// println!("Root: {}", topic.title);
/// # Ok::<(), mindmark::Error>(())
/// ```
pub fn read_xmind<P: AsRef<Path>>(path: P) -> Result<Topic> {
    let file = std::fs::File::open(path)?;
    read_xmind_from_reader(file)
}

/// Read the root topic of the first sheet from any [`Read`] + [`Seek`] source.
///
/// Only archives carrying `content.json` are supported; legacy archives
/// with just `content.xml` are rejected.
pub fn read_xmind_from_reader<R: Read + Seek>(reader: R) -> Result<Topic> {
    let mut archive = ZipArchive::new(reader)?;
    debug!(entries = archive.len(); "Opened XMind archive");

    let bytes = match read_archive_file_bytes(&mut archive, CONTENT_JSON) {
        Ok(bytes) => bytes,
        Err(Error::Zip(zip::result::ZipError::FileNotFound)) => {
            return Err(Error::InvalidXMind(format!(
                "{CONTENT_JSON} not found (legacy XML-only workbooks are not supported)"
            )));
        }
        Err(e) => return Err(e),
    };

    let json: Value = serde_json::from_slice(strip_bom(&bytes))?;
    topic_from_value(json)
}

/// Parse a topic from JSON text.
///
/// Accepts the whole `content.json` sheet list (the first sheet is used), a
/// single sheet object, or a bare topic object.
///
/// # Example
///
/// ```
/// use mindmark::read_topic_json;
///
/// let topic = read_topic_json(r#"[{ "id": "s1", "title": "Sheet 1", "rootTopic": { "title": "Root" } }]"#)?;
/// assert_eq!(topic.title, "Root");
///
/// let topic = read_topic_json(r#"{ "title": "Bare" }"#)?;
/// assert_eq!(topic.title, "Bare");
/// # Ok::<(), mindmark::Error>(())
/// ```
pub fn read_topic_json(json: &str) -> Result<Topic> {
    let value: Value = serde_json::from_str(json.trim_start_matches('\u{feff}'))?;
    topic_from_value(value)
}

fn topic_from_value(value: Value) -> Result<Topic> {
    match value {
        Value::Array(sheets) => {
            let count = sheets.len();
            let first = sheets
                .into_iter()
                .next()
                .ok_or_else(|| Error::MissingElement("sheet".into()))?;
            let sheet: Sheet = serde_json::from_value(first)?;
            debug!(sheets = count, sheet_title = sheet.title; "Using first sheet");
            Ok(sheet.root_topic)
        }
        Value::Object(ref fields) if fields.contains_key("rootTopic") => {
            let sheet: Sheet = serde_json::from_value(value)?;
            Ok(sheet.root_topic)
        }
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        _ => Err(Error::UnsupportedFormat(
            "expected a sheet list, a sheet or a topic object".into(),
        )),
    }
}

fn read_archive_file_bytes<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    path: &str,
) -> Result<Vec<u8>> {
    let mut file = archive.by_name(path)?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    debug!(path, size = contents.len(); "Read archive entry");
    Ok(contents)
}

/// Strip UTF-8 BOM (byte order mark) if present
fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn archive_with(entries: &[(&str, &[u8])]) -> Cursor<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(data).unwrap();
        }
        let mut cursor = zip.finish().unwrap();
        cursor.set_position(0);
        cursor
    }

    #[test]
    fn test_read_first_sheet() {
        let content = br#"[
            { "id": "a", "title": "One", "rootTopic": { "title": "First" } },
            { "id": "b", "title": "Two", "rootTopic": { "title": "Second" } }
        ]"#;
        let topic = read_xmind_from_reader(archive_with(&[("content.json", content)])).unwrap();
        assert_eq!(topic.title, "First");
    }

    #[test]
    fn test_read_with_bom() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(br#"[{ "rootTopic": { "title": "Root" } }]"#);
        let topic = read_xmind_from_reader(archive_with(&[("content.json", &content)])).unwrap();
        assert_eq!(topic.title, "Root");
    }

    #[test]
    fn test_legacy_archive_rejected() {
        let err = read_xmind_from_reader(archive_with(&[("content.xml", b"<xmap-content/>")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidXMind(_)), "{err:?}");
    }

    #[test]
    fn test_not_a_zip() {
        let err = read_xmind_from_reader(Cursor::new(b"plain text".to_vec())).unwrap_err();
        assert!(matches!(err, Error::Zip(_)), "{err:?}");
    }

    #[test]
    fn test_empty_sheet_list() {
        let err = read_topic_json("[]").unwrap_err();
        assert!(matches!(err, Error::MissingElement(_)), "{err:?}");
    }

    #[test]
    fn test_single_sheet_object() {
        let topic = read_topic_json(r#"{ "title": "Sheet", "rootTopic": { "title": "Root" } }"#)
            .unwrap();
        assert_eq!(topic.title, "Root");
    }

    #[test]
    fn test_scalar_json_rejected() {
        let err = read_topic_json("42").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)), "{err:?}");
    }

    #[test]
    fn test_malformed_json() {
        let err = read_topic_json("{ title: ").unwrap_err();
        assert!(matches!(err, Error::Json(_)), "{err:?}");
    }
}
