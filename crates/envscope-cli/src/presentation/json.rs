//! JSON output.

use std::collections::BTreeMap;

use envscope_core::{ReportSummary, SlotKey, SlotState};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    written: usize,
    skipped: usize,
    slots: &'a BTreeMap<SlotKey, SlotState>,
}

/// Pretty-printed `{ "written", "skipped", "slots" }` document. Slot keys
/// use their host-facing names.
pub fn render_json(
    slots: &BTreeMap<SlotKey, SlotState>,
    summary: ReportSummary,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        written: summary.written,
        skipped: summary.skipped,
        slots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use envscope_core::{Presentation, SlotContent};

    #[test]
    fn test_render_json_shape() {
        let mut slots = BTreeMap::new();
        slots.insert(
            SlotKey::IpAddress,
            SlotState {
                content: SlotContent::Text("203.0.113.7".to_string()),
                presentation: Some(Presentation::Normal),
            },
        );
        slots.insert(
            SlotKey::Rtt,
            SlotState {
                content: SlotContent::Text("50 ms".to_string()),
                presentation: None,
            },
        );

        let json = render_json(
            &slots,
            ReportSummary {
                written: 2,
                skipped: 26,
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["written"], 2);
        assert_eq!(value["skipped"], 26);
        assert_eq!(value["slots"]["ip-address"]["content"]["value"], "203.0.113.7");
        assert_eq!(value["slots"]["rtt"]["content"]["kind"], "text");
        assert!(value["slots"]["rtt"].get("presentation").is_none());
    }
}
