//! Table formatting utilities for CLI output.

use std::collections::BTreeMap;

use envscope_core::{Presentation, SlotContent, SlotKey, SlotState};

/// Values longer than this are cut in table output.
const MAX_VALUE_CHARS: usize = 96;

/// Truncates a string to a maximum number of characters, adding "..." if
/// needed.
///
/// # Examples
///
/// ```rust
/// use envscope_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Entities produced by `envscope_core::format::escape_markup`.
const ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

/// Text content of a markup fragment: tags removed, entities decoded.
pub fn plain_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    let mut rest = markup;
    while let Some(c) = rest.chars().next() {
        if in_tag {
            in_tag = c != '>';
        } else if c == '<' {
            in_tag = true;
        } else if let Some((entity, decoded)) = ENTITIES
            .iter()
            .find(|(entity, _)| c == '&' && rest.starts_with(entity))
        {
            text.push(*decoded);
            rest = &rest[entity.len()..];
            continue;
        } else {
            text.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }
    text
}

/// One aligned `key  value` line per declared slot. Error-styled slots are
/// flagged with a trailing `[error]`.
pub fn render_table(slots: &BTreeMap<SlotKey, SlotState>) -> String {
    let width = slots
        .keys()
        .map(|key| key.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (key, state) in slots {
        let value = match &state.content {
            SlotContent::Text(text) => text.clone(),
            SlotContent::Markup(markup) => plain_text(markup),
        };
        let flag = match state.presentation {
            Some(Presentation::Error) => " [error]",
            _ => "",
        };
        out.push_str(&format!(
            "{:<width$}  {}{flag}\n",
            key.as_str(),
            truncate_string(&value, MAX_VALUE_CHARS)
        ));
    }
    out
}
