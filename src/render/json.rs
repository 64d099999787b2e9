//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the Document model directly. Field names follow the model:
//! `constants`, `functions[].{name, return_type, summary, description,
//! params, returns}`. Absent optional parts are omitted.

use crate::model::Document;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> String {
        // Plain strings and vectors only; serialization cannot fail.
        let mut out = serde_json::to_string_pretty(doc).expect("document serializes to JSON");
        out.push('\n');
        out
    }
}
