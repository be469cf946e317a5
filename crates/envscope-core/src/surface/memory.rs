//! In-process display surface.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::{Presentation, SlotContent, SlotKey, SlotUpdate};
use crate::ports::{DisplaySurface, WriteOutcome};

/// State of one declared slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotState {
    pub content: SlotContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentation: Option<Presentation>,
}

/// Thread-safe surface holding a fixed set of declared slots.
///
/// Slots are declared up front (like elements on a pre-rendered page) and
/// never added or removed by writes.
#[derive(Debug, Default)]
pub struct MemorySurface {
    slots: RwLock<BTreeMap<SlotKey, SlotState>>,
}

impl MemorySurface {
    /// Surface declaring every known slot, each holding `placeholder`.
    pub fn with_all_slots(placeholder: &str) -> Self {
        Self::with_slots(SlotKey::ALL, placeholder)
    }

    /// Surface declaring only the given slots.
    pub fn with_slots(keys: impl IntoIterator<Item = SlotKey>, placeholder: &str) -> Self {
        let slots = keys
            .into_iter()
            .map(|key| {
                (
                    key,
                    SlotState {
                        content: SlotContent::Text(placeholder.to_string()),
                        presentation: None,
                    },
                )
            })
            .collect();
        Self {
            slots: RwLock::new(slots),
        }
    }

    /// Current state of a slot, if declared.
    pub fn get(&self, key: SlotKey) -> Option<SlotState> {
        self.read().get(&key).cloned()
    }

    /// Text of a slot, if declared.
    pub fn text(&self, key: SlotKey) -> Option<String> {
        self.get(key).map(|state| state.content.as_str().to_string())
    }

    /// Whether the slot was declared.
    pub fn has_slot(&self, key: SlotKey) -> bool {
        self.read().contains_key(&key)
    }

    /// Copy of every declared slot, ordered by key.
    pub fn snapshot(&self) -> BTreeMap<SlotKey, SlotState> {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<SlotKey, SlotState>> {
        // A poisoned lock still holds consistent slot values; each write is a
        // single map assignment.
        self.slots
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl DisplaySurface for MemorySurface {
    fn replace(&self, key: SlotKey, update: SlotUpdate) -> WriteOutcome {
        let mut slots = self
            .slots
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let Some(slot) = slots.get_mut(&key) else {
            return WriteOutcome::Skipped;
        };
        slot.content = update.content;
        if let Some(presentation) = update.presentation {
            slot.presentation = Some(presentation);
        }
        WriteOutcome::Written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_slots_start_with_placeholder() {
        let surface = MemorySurface::with_all_slots("取得中...");
        assert_eq!(surface.snapshot().len(), SlotKey::ALL.len());
        assert_eq!(surface.text(SlotKey::Rtt).as_deref(), Some("取得中..."));
    }

    #[test]
    fn test_replace_missing_slot_is_skipped() {
        let surface = MemorySurface::with_slots([SlotKey::City], "");
        let outcome = surface.replace(SlotKey::Postal, SlotUpdate::text("100-0001"));
        assert_eq!(outcome, WriteOutcome::Skipped);
        assert!(!surface.has_slot(SlotKey::Postal));
        assert_eq!(surface.snapshot().len(), 1);
    }

    #[test]
    fn test_replace_keeps_presentation_unless_given() {
        let surface = MemorySurface::with_slots([SlotKey::IpAddress], "");
        surface.replace(
            SlotKey::IpAddress,
            SlotUpdate::text("取得失敗").with_presentation(Presentation::Error),
        );
        surface.replace(SlotKey::IpAddress, SlotUpdate::text("retry"));

        let state = surface.get(SlotKey::IpAddress).unwrap();
        assert_eq!(state.content, SlotContent::Text("retry".to_string()));
        assert_eq!(state.presentation, Some(Presentation::Error));
    }
}
