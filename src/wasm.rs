//! WASM bindings for browser-based conversion.
//!
//! This module exposes the conversion functions to JavaScript via wasm-bindgen.
//! Topics are passed as JSON text in any shape [`read_topic_json`] accepts.

use std::io::Cursor;
use wasm_bindgen::prelude::*;

use crate::markdown::generate_markdown;
use crate::xmind::{XMindConfig, read_topic_json, write_xmind_to_writer};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert a topic tree to Markdown.
///
/// Takes `content.json` text (or a single topic) and returns the document.
#[wasm_bindgen]
pub fn topic_to_markdown(json: &str) -> Result<String, JsValue> {
    let topic = read_topic_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(generate_markdown(&topic.normalize()))
}

/// Package a topic tree as an `.xmind` archive.
///
/// Takes `content.json` text (or a single topic) and returns the archive bytes.
#[wasm_bindgen]
pub fn topic_to_xmind(json: &str) -> Result<Vec<u8>, JsValue> {
    let topic = read_topic_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut output = Cursor::new(Vec::new());
    write_xmind_to_writer(&topic, &mut output, &XMindConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(output.into_inner())
}
