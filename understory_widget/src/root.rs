// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The UI root: widget registry, focus record, hover slot, and the construction API.
//!
//! ## Ownership
//!
//! The application creates every widget and hands it to [`UiRoot::register`]; it takes it
//! back with [`UiRoot::unregister`]. The engine never creates or drops widgets on its own.
//! Widgets refer to each other only by [`WidgetId`].
//!
//! ## Policies
//!
//! - [`UiRoot::set_primary_button`]: the button that starts gestures (default
//!   [`PointerButton::Primary`]); presses of other buttons are ignored.
//! - [`UiRoot::set_blur_on_press`]: whether pressing a widget that cannot take focus drops the
//!   current focus (default `true`). Presses on empty space always drop focus.
//!
//! Interaction state and the focus record are only changed by dispatch and by the
//! enable/visibility setters here, which keep them consistent.

use alloc::boxed::Box;

use kurbo::{Point, Rect};

use crate::error::{UiError, UiResult};
use crate::focus::{FocusManager, FocusRecord};
use crate::geometry::{resolve_top_widget, validate_bounds};
use crate::hover::HoverState;
use crate::registry::Registry;
use crate::types::{InteractionState, PointerButton, UiEvent, WidgetId};
use crate::widget::Widget;

/// One independent widget hierarchy with its own focus and capture.
#[derive(Debug)]
pub struct UiRoot {
    pub(crate) registry: Registry,
    pub(crate) focus: FocusManager,
    pub(crate) hover: HoverState<WidgetId>,
    pub(crate) pointer: Option<Point>,
    pub(crate) primary_button: PointerButton,
    pub(crate) blur_on_press: bool,
}

impl Default for UiRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRoot {
    /// Create an empty root with default policies.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            focus: FocusManager::new(),
            hover: HoverState::new(),
            pointer: None,
            primary_button: PointerButton::Primary,
            blur_on_press: true,
        }
    }

    /// Set the pointer button that starts press/drag gestures.
    pub fn set_primary_button(&mut self, button: PointerButton) {
        self.primary_button = button;
    }

    /// Set whether a press on a widget that does not accept focus clears focus.
    pub fn set_blur_on_press(&mut self, blur: bool) {
        self.blur_on_press = blur;
    }

    /// Register a widget.
    ///
    /// Fails with [`UiError::DuplicateId`] or [`UiError::InvalidBounds`]; nothing changes then.
    pub fn register(&mut self, widget: impl Widget) -> UiResult<WidgetId> {
        self.registry.insert(Box::new(widget))
    }

    /// Register an already boxed widget.
    pub fn register_boxed(&mut self, widget: Box<dyn Widget>) -> UiResult<WidgetId> {
        self.registry.insert(widget)
    }

    /// Remove a widget and return it.
    ///
    /// Any focus, capture, or hover reference to it is dropped without emitting events.
    pub fn unregister(&mut self, id: WidgetId) -> UiResult<Box<dyn Widget>> {
        let widget = self.registry.remove(id)?;
        self.focus.forget(id);
        self.hover.forget(id);
        Ok(widget)
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True if no widgets are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// True if `id` is registered.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.registry.contains(id)
    }

    /// The registry, for read-only traversal (e.g. a render pass).
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Borrow a widget through the common contract.
    pub fn widget(&self, id: WidgetId) -> Option<&(dyn Widget + 'static)> {
        self.registry.get(id)
    }

    /// Borrow a widget as its concrete control type.
    pub fn get<T: Widget>(&self, id: WidgetId) -> UiResult<&T> {
        self.registry.downcast(id)
    }

    /// Mutably borrow a widget as its concrete control type, e.g. to set a slider value.
    ///
    /// Must not be used to change state concurrently with a dispatch call; the borrow checker
    /// enforces this within one thread.
    pub fn get_mut<T: Widget>(&mut self, id: WidgetId) -> UiResult<&mut T> {
        self.registry.downcast_mut(id)
    }

    /// Interaction state of a widget.
    pub fn state(&self, id: WidgetId) -> Option<InteractionState> {
        self.registry.get(id).map(|w| w.core().state())
    }

    /// Focus and capture snapshot.
    pub fn focus_record(&self) -> FocusRecord {
        self.focus.record()
    }

    /// Focused widget.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focus.focused()
    }

    /// Widget holding pointer capture.
    pub fn captured(&self) -> Option<WidgetId> {
        self.focus.captured()
    }

    /// Widget currently hovered.
    pub fn hovered(&self) -> Option<WidgetId> {
        self.hover.current()
    }

    /// Last pointer position seen by dispatch.
    pub fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    /// Topmost visible, enabled, interactive widget at `pt`.
    pub fn top_widget_at(&self, pt: Point) -> Option<WidgetId> {
        resolve_top_widget(self.registry.candidates(), pt)
    }

    /// Enable or disable a widget.
    ///
    /// Disabling forces [`InteractionState::Disabled`] and drops hover and capture; the widget
    /// keeps focus if it had it but receives no input. Re-enabling resets to
    /// [`InteractionState::Idle`].
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) -> UiResult<()> {
        let widget = self.registry.get_mut(id).ok_or(UiError::NotFound(id))?;
        if widget.core_mut().set_enabled(enabled) {
            log::debug!("{} {}", if enabled { "enabled" } else { "disabled" }, id);
            self.hover.forget(id);
            if !enabled && self.focus.captured() == Some(id) {
                self.focus.release_capture();
            }
        }
        Ok(())
    }

    /// Show or hide a widget. Hidden widgets are skipped by hit testing and lose hover and
    /// capture.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) -> UiResult<()> {
        let widget = self.registry.get_mut(id).ok_or(UiError::NotFound(id))?;
        widget.core_mut().set_visible(visible);
        if !visible {
            self.hover.forget(id);
            if self.focus.captured() == Some(id) {
                self.focus.release_capture();
            }
        }
        Ok(())
    }

    /// Move or resize a widget. Negative sizes are rejected, never clamped.
    pub fn set_bounds(&mut self, id: WidgetId, bounds: Rect) -> UiResult<()> {
        validate_bounds(id, bounds)?;
        let widget = self.registry.get_mut(id).ok_or(UiError::NotFound(id))?;
        widget.core_mut().set_bounds(bounds);
        Ok(())
    }

    /// Change a widget's z-order.
    pub fn set_z_order(&mut self, id: WidgetId, z_order: i32) -> UiResult<()> {
        let widget = self.registry.get_mut(id).ok_or(UiError::NotFound(id))?;
        widget.core_mut().set_z_order(z_order);
        Ok(())
    }

    /// Programmatically move focus to `id`.
    ///
    /// Unknown ids are [`UiError::NotFound`]. A widget that does not accept focus leaves the
    /// record unchanged and yields `Ok(None)`; otherwise the resulting
    /// [`FocusChanged`](UiEvent::FocusChanged), if any, is returned.
    pub fn request_focus(&mut self, id: WidgetId) -> UiResult<Option<UiEvent>> {
        let accepts = self
            .registry
            .get(id)
            .ok_or(UiError::NotFound(id))?
            .accepts_focus();
        self.focus.begin();
        self.focus.request_focus(id, accepts);
        Ok(self.focus.finish())
    }

    /// Programmatically drop focus, returning the resulting focus event, if any.
    pub fn clear_focus(&mut self) -> Option<UiEvent> {
        self.focus.begin();
        self.focus.clear_focus();
        self.focus.finish()
    }
}
