//! Standalone HTML page output.
//!
//! Each slot becomes a `<dd id="{key}">`; text is escaped, markup slots are
//! inserted as produced by the reporter, and a presentation state becomes
//! the element's class.

use std::collections::BTreeMap;
use std::fmt::Write;

use envscope_core::format::escape_markup;
use envscope_core::{SlotContent, SlotKey, SlotState};

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
dl{display:grid;grid-template-columns:max-content auto;gap:.4em 1.5em}\
dt{font-weight:bold}.success{color:#1a7f37}.error{color:#cf222e}";

/// Render the surface as a complete HTML document.
pub fn render_html(slots: &BTreeMap<SlotKey, SlotState>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>環境情報</title>\n");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    out.push_str("</head>\n<body>\n<dl>\n");

    for (key, state) in slots {
        let body = match &state.content {
            SlotContent::Text(text) => escape_markup(text),
            SlotContent::Markup(markup) => markup.clone(),
        };
        let class = state
            .presentation
            .map(|p| format!(" class=\"{}\"", p.class_name()))
            .unwrap_or_default();
        let _ = writeln!(out, "<dt>{key}</dt><dd id=\"{key}\"{class}>{body}</dd>");
    }

    out.push_str("</dl>\n</body>\n</html>\n");
    out
}
