// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget registry and the deferred-mutation queue.
//!
//! The registry maps ids to widgets and stamps each registration with a monotonically
//! increasing sequence number, used as the hit-test tie-break on equal z-order.
//!
//! Structural changes requested while a dispatch call is delivering events are recorded in a
//! [`Deferred`] queue and applied once the current input event has finished processing.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::any::Any;

use crate::error::{UiError, UiResult};
use crate::geometry::{HitCandidate, validate_bounds};
use crate::types::WidgetId;
use crate::widget::Widget;

#[derive(Debug)]
struct Entry {
    seq: u64,
    widget: Box<dyn Widget>,
}

/// Id-keyed store of registered widgets.
#[derive(Debug, Default)]
pub struct Registry {
    entries: BTreeMap<WidgetId, Entry>,
    next_seq: u64,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `id` is registered.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Validate and insert a widget.
    ///
    /// Fails on a duplicate id or on negative/non-finite bounds; nothing is inserted then.
    pub fn insert(&mut self, widget: Box<dyn Widget>) -> UiResult<WidgetId> {
        let core = widget.core();
        let id = core.id();
        if self.entries.contains_key(&id) {
            return Err(UiError::DuplicateId(id));
        }
        validate_bounds(id, core.bounds())?;
        let seq = self.next_seq;
        self.next_seq += 1;
        log::debug!("registered {} {} (seq {})", widget.kind(), id, seq);
        self.entries.insert(id, Entry { seq, widget });
        Ok(id)
    }

    /// Remove a widget, handing ownership back to the caller.
    pub fn remove(&mut self, id: WidgetId) -> UiResult<Box<dyn Widget>> {
        let entry = self.entries.remove(&id).ok_or(UiError::NotFound(id))?;
        log::debug!("unregistered {} {}", entry.widget.kind(), id);
        Ok(entry.widget)
    }

    /// Borrow a widget through the common contract.
    pub fn get(&self, id: WidgetId) -> Option<&(dyn Widget + 'static)> {
        self.entries.get(&id).map(|e| e.widget.as_ref())
    }

    /// Mutably borrow a widget through the common contract.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> {
        self.entries.get_mut(&id).map(|e| e.widget.as_mut())
    }

    /// Borrow a widget as its concrete control type.
    pub fn downcast<T: Widget>(&self, id: WidgetId) -> UiResult<&T> {
        let widget = self.get(id).ok_or(UiError::NotFound(id))?;
        let any: &(dyn Any + 'static) = widget;
        any.downcast_ref::<T>().ok_or(UiError::TypeMismatch(id))
    }

    /// Mutably borrow a widget as its concrete control type.
    pub fn downcast_mut<T: Widget>(&mut self, id: WidgetId) -> UiResult<&mut T> {
        let widget = self.get_mut(id).ok_or(UiError::NotFound(id))?;
        let any: &mut (dyn Any + 'static) = widget;
        any.downcast_mut::<T>().ok_or(UiError::TypeMismatch(id))
    }

    pub(crate) fn widgets_mut(&mut self) -> impl Iterator<Item = &mut (dyn Widget + 'static)> + '_ {
        self.entries.values_mut().map(|e| e.widget.as_mut())
    }

    /// Hit-test view of every registered widget.
    pub fn candidates(&self) -> impl Iterator<Item = HitCandidate> + '_ {
        self.entries
            .values()
            .map(|e| e.widget.core().hit_candidate(e.seq))
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> Vec<WidgetId> {
        let mut seqs: Vec<(u64, WidgetId)> = self.entries.iter().map(|(id, e)| (e.seq, *id)).collect();
        seqs.sort_unstable();
        seqs.into_iter().map(|(_, id)| id).collect()
    }
}

/// A structural change queued during event delivery.
#[derive(Debug)]
pub(crate) enum Mutation {
    Register(Box<dyn Widget>),
    Unregister(WidgetId),
    SetEnabled(WidgetId, bool),
    SetVisible(WidgetId, bool),
}

/// Queue of structural changes requested from inside an event handler.
///
/// Handed to [`EventHandler::handle`](crate::dispatcher::EventHandler::handle); the queued
/// changes are applied in order after the current input event has been fully processed.
/// Changes that turn out to be invalid when applied are logged and dropped.
#[derive(Debug, Default)]
pub struct Deferred {
    pub(crate) ops: Vec<Mutation>,
}

impl Deferred {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue registration of a widget.
    pub fn register(&mut self, widget: impl Widget) {
        self.ops.push(Mutation::Register(Box::new(widget)));
    }

    /// Queue removal of a widget.
    pub fn unregister(&mut self, id: WidgetId) {
        self.ops.push(Mutation::Unregister(id));
    }

    /// Queue an enablement change.
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) {
        self.ops.push(Mutation::SetEnabled(id, enabled));
    }

    /// Queue a visibility change.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        self.ops.push(Mutation::SetVisible(id, visible));
    }

    /// Number of queued changes.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Button, Label};
    use crate::geometry::rect;
    use alloc::vec;

    #[test]
    fn insert_rejects_duplicates_and_bad_bounds() {
        let mut reg = Registry::new();
        reg.insert(Box::new(Button::new(WidgetId(1), rect(0.0, 0.0, 10.0, 10.0))))
            .unwrap();
        assert_eq!(
            reg.insert(Box::new(Button::new(WidgetId(1), rect(0.0, 0.0, 5.0, 5.0)))),
            Err(UiError::DuplicateId(WidgetId(1)))
        );
        assert!(matches!(
            reg.insert(Box::new(Button::new(WidgetId(2), rect(0.0, 0.0, 5.0, -5.0)))),
            Err(UiError::InvalidBounds { .. })
        ));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn remove_unknown_is_not_found() {
        let mut reg = Registry::new();
        assert!(matches!(
            reg.remove(WidgetId(9)),
            Err(UiError::NotFound(WidgetId(9)))
        ));
    }

    #[test]
    fn downcast_checks_type() {
        let mut reg = Registry::new();
        reg.insert(Box::new(Label::new(WidgetId(1), rect(0.0, 0.0, 10.0, 10.0), "hi")))
            .unwrap();
        assert_eq!(reg.downcast::<Label>(WidgetId(1)).unwrap().text(), "hi");
        assert_eq!(
            reg.downcast::<Button>(WidgetId(1)).unwrap_err(),
            UiError::TypeMismatch(WidgetId(1))
        );
        assert_eq!(
            reg.downcast_mut::<Label>(WidgetId(2)).unwrap_err(),
            UiError::NotFound(WidgetId(2))
        );
    }

    #[test]
    fn ids_follow_registration_order() {
        let mut reg = Registry::new();
        for id in [5, 1, 3] {
            reg.insert(Box::new(Button::new(WidgetId(id), rect(0.0, 0.0, 1.0, 1.0))))
                .unwrap();
        }
        assert_eq!(reg.ids(), vec![WidgetId(5), WidgetId(1), WidgetId(3)]);
        let _ = reg.remove(WidgetId(1));
        reg.insert(Box::new(Button::new(WidgetId(1), rect(0.0, 0.0, 1.0, 1.0))))
            .unwrap();
        assert_eq!(reg.ids(), vec![WidgetId(5), WidgetId(3), WidgetId(1)]);
    }

    #[test]
    fn deferred_records_in_order() {
        let mut d = Deferred::new();
        assert!(d.is_empty());
        d.unregister(WidgetId(1));
        d.set_enabled(WidgetId(2), false);
        d.register(Button::new(WidgetId(3), rect(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(d.len(), 3);
        assert!(matches!(d.ops[0], Mutation::Unregister(WidgetId(1))));
        assert!(matches!(d.ops[2], Mutation::Register(_)));
    }
}
