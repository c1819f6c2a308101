// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard focus and pointer capture for one UI root.
//!
//! ## Overview
//!
//! [`FocusRecord`] is a plain value: at most one focused widget and at most one captured
//! widget. [`FocusManager`] owns it and enforces the event rule: within one dispatch call any
//! number of focus requests may happen, but at most one
//! [`FocusChanged`](crate::types::UiEvent::FocusChanged) is emitted, describing the net change
//! from the owner at the start of the call to the owner at the end (last request wins).
//!
//! Capture carries no events. It is set on a gesture start and released on its end.

use crate::types::{PointerButton, UiEvent, WidgetId};

/// Which widget owns keyboard focus and which owns pointer capture.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FocusRecord {
    /// Widget receiving key and text input.
    pub focused: Option<WidgetId>,
    /// Widget receiving all pointer events of the current gesture.
    pub capture: Option<WidgetId>,
}

/// Owner of a [`FocusRecord`] with per-dispatch change coalescing.
#[derive(Clone, Debug, Default)]
pub struct FocusManager {
    record: FocusRecord,
    // Focus owner when the current dispatch call began; `None` outside a call.
    checkpoint: Option<Option<WidgetId>>,
    // Button that started the captured gesture; set exactly when `record.capture` is.
    capture_button: Option<PointerButton>,
}

impl FocusManager {
    /// Create a manager with nothing focused or captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the record.
    pub fn record(&self) -> FocusRecord {
        self.record
    }

    /// Currently focused widget.
    pub fn focused(&self) -> Option<WidgetId> {
        self.record.focused
    }

    /// Currently captured widget.
    pub fn captured(&self) -> Option<WidgetId> {
        self.record.capture
    }

    /// Mark the start of a dispatch call.
    pub fn begin(&mut self) {
        self.checkpoint = Some(self.record.focused);
    }

    /// Mark the end of a dispatch call and return the coalesced focus event, if the owner
    /// differs from the one at [`begin`](Self::begin).
    pub fn finish(&mut self) -> Option<UiEvent> {
        let old = self.checkpoint.take()?;
        let new = self.record.focused;
        if old == new {
            return None;
        }
        log::debug!("focus {:?} -> {:?}", old, new);
        Some(UiEvent::FocusChanged { old, new })
    }

    /// Move focus to `id` if it `accepts` focus. Returns true if the request was honored.
    ///
    /// A refused request is a no-op and produces no event.
    pub fn request_focus(&mut self, id: WidgetId, accepts: bool) -> bool {
        if !accepts {
            return false;
        }
        self.record.focused = Some(id);
        true
    }

    /// Drop focus.
    pub fn clear_focus(&mut self) {
        self.record.focused = None;
    }

    /// Button that started the captured gesture. Only its release ends the gesture.
    pub fn capture_button(&self) -> Option<PointerButton> {
        self.capture_button
    }

    /// Route the rest of the gesture started by `button` to `id`.
    pub fn set_capture(&mut self, id: WidgetId, button: PointerButton) {
        log::debug!("capture acquired by {} ({:?})", id, button);
        self.record.capture = Some(id);
        self.capture_button = Some(button);
    }

    /// End capture, returning the widget that held it.
    pub fn release_capture(&mut self) -> Option<WidgetId> {
        self.capture_button = None;
        let released = self.record.capture.take();
        if let Some(id) = released {
            log::debug!("capture released by {}", id);
        }
        released
    }

    /// Remove every reference to `id` without emitting events.
    pub fn forget(&mut self, id: WidgetId) {
        if self.record.focused == Some(id) {
            self.record.focused = None;
        }
        if self.record.capture == Some(id) {
            self.record.capture = None;
            self.capture_button = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: WidgetId = WidgetId(1);
    const B: WidgetId = WidgetId(2);

    #[test]
    fn refused_request_is_silent() {
        let mut f = FocusManager::new();
        f.begin();
        assert!(!f.request_focus(A, false));
        assert_eq!(f.finish(), None);
        assert_eq!(f.focused(), None);
    }

    #[test]
    fn one_event_per_call_last_request_wins() {
        let mut f = FocusManager::new();
        f.begin();
        assert!(f.request_focus(A, true));
        assert!(f.request_focus(B, true));
        assert_eq!(
            f.finish(),
            Some(UiEvent::FocusChanged {
                old: None,
                new: Some(B)
            })
        );
        assert_eq!(f.finish(), None, "checkpoint consumed");
    }

    #[test]
    fn round_trip_within_call_is_silent() {
        let mut f = FocusManager::new();
        f.begin();
        f.request_focus(A, true);
        let _ = f.finish();

        f.begin();
        f.clear_focus();
        f.request_focus(A, true);
        assert_eq!(f.finish(), None);
    }

    #[test]
    fn capture_set_release() {
        let mut f = FocusManager::new();
        f.set_capture(A, PointerButton::Secondary);
        assert_eq!(f.captured(), Some(A));
        assert_eq!(f.capture_button(), Some(PointerButton::Secondary));
        assert_eq!(f.release_capture(), Some(A));
        assert_eq!(f.capture_button(), None);
        assert_eq!(f.release_capture(), None);
    }

    #[test]
    fn forget_clears_both_slots() {
        let mut f = FocusManager::new();
        f.request_focus(A, true);
        f.set_capture(A, PointerButton::Primary);
        f.forget(B);
        assert_eq!(f.record(), FocusRecord {
            focused: Some(A),
            capture: Some(A)
        });
        f.forget(A);
        assert_eq!(f.record(), FocusRecord::default());
        assert_eq!(f.capture_button(), None);
    }
}
