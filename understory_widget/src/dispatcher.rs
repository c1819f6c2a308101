// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event dispatch: raw input in, state transitions and semantic events out.
//!
//! ## Overview
//!
//! [`UiRoot::dispatch`] processes one [`InputEvent`] to completion before returning:
//!
//! 1. Resolve the target: the capture owner for pointer events during a gesture, the focus
//!    owner for key and text events, otherwise the topmost widget under the pointer.
//! 2. Drive the target's interaction state through the [`Widget`](crate::widget::Widget) hooks
//!    and update focus, capture, and hover.
//! 3. Append the coalesced [`FocusChanged`](UiEvent::FocusChanged), if focus moved.
//! 4. Deliver the collected [`UiEvent`]s, in order, to the [`EventHandler`].
//! 5. Apply the structural changes the handler queued on [`Deferred`].
//!
//! ## Routing rules
//!
//! - `PointerMove` during a gesture goes to the captured widget's `on_drag` (draggable widgets
//!   in `Dragging` only) and skips hover resolution. Otherwise hover is re-resolved and at
//!   most one leave and one enter are delivered.
//! - `PointerDown` with the primary button on a clickable or draggable widget starts a gesture
//!   and takes capture. An editable target requests focus; empty space clears it.
//! - `PointerUp` with the button that started the gesture ends it on the captured widget
//!   wherever the pointer is, even if the primary button policy changed in between.
//!   A `Pressed` widget released inside its bounds is `Clicked`.
//! - `KeyDown` and `TextInput` go only to an enabled, editable focus owner and are dropped
//!   otherwise. `Escape` clears focus.
//!
//! Dispatch never fails. A capture that refers to a removed, disabled, or hidden widget is
//! dropped and the event is handled as if no gesture were active.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::geometry::contains;
use crate::registry::{Deferred, Mutation};
use crate::root::UiRoot;
use crate::types::{
    Capabilities, InputEvent, InteractionState, Key, Modifiers, PointerButton, UiEvent, WidgetId,
};

/// Receiver of semantic events.
///
/// Handlers run synchronously inside [`UiRoot::dispatch`]. They cannot borrow the root, so
/// structural changes are requested through `deferred` and applied after the current input
/// event has been fully processed.
///
/// Any `FnMut(&UiEvent, &mut Deferred)` closure is a handler.
pub trait EventHandler {
    /// Handle one event.
    fn handle(&mut self, event: &UiEvent, deferred: &mut Deferred);
}

impl<F> EventHandler for F
where
    F: FnMut(&UiEvent, &mut Deferred),
{
    fn handle(&mut self, event: &UiEvent, deferred: &mut Deferred) {
        self(event, deferred);
    }
}

impl UiRoot {
    /// Process one input event and deliver the resulting semantic events to `handler`.
    pub fn dispatch<H>(&mut self, event: &InputEvent, handler: &mut H)
    where
        H: EventHandler + ?Sized,
    {
        log::trace!("dispatch {:?}", event);
        let mut events = Vec::new();
        self.settle_stray_gestures();
        self.focus.begin();
        match event {
            InputEvent::PointerMove { position } => self.pointer_move(*position, &mut events),
            InputEvent::PointerDown { position, button } => {
                self.pointer_down(*position, *button);
            }
            InputEvent::PointerUp { position, button } => {
                self.pointer_up(*position, *button, &mut events);
            }
            InputEvent::KeyDown { key, modifiers } => {
                self.key_down(*key, *modifiers, &mut events);
            }
            InputEvent::TextInput { text } => self.text_input(text, &mut events),
        }
        if let Some(focus_event) = self.focus.finish() {
            events.push(focus_event);
        }

        let mut deferred = Deferred::new();
        for e in &events {
            handler.handle(e, &mut deferred);
        }
        self.apply_deferred(deferred);
    }

    /// Process a frame's worth of input events in order and collect every semantic event.
    ///
    /// ```
    /// use understory_widget::controls::Button;
    /// use understory_widget::geometry::rect;
    /// use understory_widget::root::UiRoot;
    /// use understory_widget::types::{InputEvent, UiEvent, WidgetId};
    ///
    /// let mut ui = UiRoot::new();
    /// let ok = ui.register(Button::new(WidgetId(1), rect(0.0, 0.0, 80.0, 24.0))).unwrap();
    /// let out = ui.dispatch_all(&[InputEvent::pointer_down(5.0, 5.0), InputEvent::pointer_up(6.0, 5.0)]);
    /// assert_eq!(out, vec![UiEvent::Clicked { widget_id: ok }]);
    /// ```
    pub fn dispatch_all(&mut self, events: &[InputEvent]) -> Vec<UiEvent> {
        let mut out = Vec::new();
        let mut collect = |e: &UiEvent, _: &mut Deferred| out.push(e.clone());
        for event in events {
            self.dispatch(event, &mut collect);
        }
        out
    }

    fn pointer_move(&mut self, pos: Point, events: &mut Vec<UiEvent>) {
        let delta = self.pointer.map(|prev| pos - prev).unwrap_or(Vec2::ZERO);
        self.pointer = Some(pos);
        if let Some(id) = self.live_capture() {
            if let Some(widget) = self.registry.get_mut(id) {
                let core = widget.core();
                if core.capabilities().contains(Capabilities::DRAGGABLE)
                    && core.state() == InteractionState::Dragging
                {
                    widget.on_drag(delta, events);
                }
            }
            return;
        }
        self.update_hover(pos);
    }

    fn pointer_down(&mut self, pos: Point, button: PointerButton) {
        self.pointer = Some(pos);
        if button != self.primary_button || self.live_capture().is_some() {
            return;
        }
        self.update_hover(pos);
        let Some(id) = self.top_widget_at(pos) else {
            self.focus.clear_focus();
            return;
        };
        let Some(widget) = self.registry.get_mut(id) else {
            return;
        };
        let caps = widget.core().capabilities();
        if caps.intersects(Capabilities::CLICKABLE | Capabilities::DRAGGABLE) {
            widget.on_press(pos);
            if widget.core().state().is_active() {
                self.focus.set_capture(id, button);
            }
        }
        if caps.contains(Capabilities::EDITABLE) {
            let accepts = widget.accepts_focus();
            self.focus.request_focus(id, accepts);
        } else if self.blur_on_press {
            self.focus.clear_focus();
        }
    }

    fn pointer_up(&mut self, pos: Point, button: PointerButton, events: &mut Vec<UiEvent>) {
        self.pointer = Some(pos);
        let Some(id) = self.live_capture() else {
            if button == self.primary_button {
                self.update_hover(pos);
            }
            return;
        };
        // Match the button that started the gesture, not the current policy.
        if self.focus.capture_button() != Some(button) {
            return;
        }
        self.focus.release_capture();
        if let Some(widget) = self.registry.get_mut(id) {
            let inside = contains(widget.core().bounds(), pos);
            let held = widget.core().state();
            widget.on_release(pos, inside);
            if held == InteractionState::Pressed && inside {
                log::debug!("clicked {}", id);
                events.push(UiEvent::Clicked { widget_id: id });
            }
        }
        // The released widget is idle now; re-derive hover from scratch for it.
        self.hover.forget(id);
        self.update_hover(pos);
    }

    fn key_down(&mut self, key: Key, modifiers: Modifiers, events: &mut Vec<UiEvent>) {
        if key == Key::Escape && self.focus.focused().is_some() {
            self.focus.clear_focus();
            return;
        }
        if let Some(id) = self.editable_focus()
            && let Some(widget) = self.registry.get_mut(id)
        {
            widget.on_key(key, modifiers, events);
        }
    }

    fn text_input(&mut self, text: &str, events: &mut Vec<UiEvent>) {
        if let Some(id) = self.editable_focus()
            && let Some(widget) = self.registry.get_mut(id)
        {
            widget.on_text(text, events);
        }
    }

    /// End any press or drag that does not hold capture.
    ///
    /// Gesture hooks are reachable through typed access, so a widget can be left active
    /// outside a dispatched gesture; it would otherwise never see a matching release.
    fn settle_stray_gestures(&mut self) {
        let capture = self.focus.captured();
        for widget in self.registry.widgets_mut() {
            let core = widget.core_mut();
            if core.state().is_active() && Some(core.id()) != capture {
                log::debug!("ending stray gesture on {}", core.id());
                core.end_gesture();
                self.hover.forget(core.id());
            }
        }
    }

    /// The focus owner if it can currently take keyboard input.
    fn editable_focus(&self) -> Option<WidgetId> {
        let id = self.focus.focused()?;
        let core = self.registry.get(id)?.core();
        (core.is_enabled() && core.capabilities().contains(Capabilities::EDITABLE)).then_some(id)
    }

    /// The capture owner, dropping a capture that no longer refers to a usable widget.
    fn live_capture(&mut self) -> Option<WidgetId> {
        let id = self.focus.captured()?;
        let usable = self
            .registry
            .get(id)
            .is_some_and(|w| w.core().is_enabled() && w.core().is_visible());
        if usable {
            Some(id)
        } else {
            log::debug!("dropping stale capture of {}", id);
            self.focus.release_capture();
            None
        }
    }

    fn update_hover(&mut self, pos: Point) {
        let top = self.top_widget_at(pos);
        let transition = self.hover.update(top);
        if let Some(id) = transition.leave
            && let Some(widget) = self.registry.get_mut(id)
        {
            widget.on_pointer_leave();
        }
        if let Some(id) = transition.enter
            && let Some(widget) = self.registry.get_mut(id)
        {
            widget.on_pointer_enter();
        }
    }

    fn apply_deferred(&mut self, deferred: Deferred) {
        for op in deferred.ops {
            let result = match op {
                Mutation::Register(widget) => self.register_boxed(widget).map(|_| ()),
                Mutation::Unregister(id) => self.unregister(id).map(|_| ()),
                Mutation::SetEnabled(id, enabled) => self.set_enabled(id, enabled),
                Mutation::SetVisible(id, visible) => self.set_visible(id, visible),
            };
            if let Err(err) = result {
                log::warn!("dropped deferred change: {}", err);
            }
        }
    }
}
