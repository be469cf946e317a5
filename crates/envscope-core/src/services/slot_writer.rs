//! The single mutation primitive every probe writes through.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{Presentation, SlotKey, SlotUpdate};
use crate::ports::{DisplaySurface, WriteOutcome};

/// Writes probe results into the display surface.
///
/// Writes to undeclared slots are silently skipped and counted.
pub struct SlotWriter {
    surface: Arc<dyn DisplaySurface>,
    written: AtomicUsize,
    skipped: AtomicUsize,
}

impl SlotWriter {
    pub fn new(surface: Arc<dyn DisplaySurface>) -> Self {
        Self {
            surface,
            written: AtomicUsize::new(0),
            skipped: AtomicUsize::new(0),
        }
    }

    /// Replace a slot's text.
    pub fn text(&self, key: SlotKey, text: impl Into<String>) {
        self.write(key, SlotUpdate::text(text));
    }

    /// Replace a slot's text and its presentation state.
    pub fn styled(&self, key: SlotKey, text: impl Into<String>, presentation: Presentation) {
        self.write(key, SlotUpdate::text(text).with_presentation(presentation));
    }

    /// Replace a slot's content with pre-rendered markup.
    pub fn markup(&self, key: SlotKey, markup: impl Into<String>) {
        self.write(key, SlotUpdate::markup(markup));
    }

    pub fn write(&self, key: SlotKey, update: SlotUpdate) {
        match self.surface.replace(key, update) {
            WriteOutcome::Written => {
                self.written.fetch_add(1, Ordering::Relaxed);
            }
            WriteOutcome::Skipped => {
                self.skipped.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(slot = %key, "Slot not declared on surface, skipping write");
            }
        }
    }

    pub fn written(&self) -> usize {
        self.written.load(Ordering::Relaxed)
    }

    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }
}
