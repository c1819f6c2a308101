// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget contract and the shared per-widget interaction state machine.
//!
//! ## State machine
//!
//! ```text
//!            enter                press (clickable)
//!   Idle ───────────▶ Hovered ─────────────────────▶ Pressed
//!     ▲ ◀───────────     │      press (draggable)       │
//!     │     leave        └─────────────────────────▶ Dragging
//!     │                                                 │
//!     └──────────────── release (any position) ◀────────┘
//!
//!   any ── disable ──▶ Disabled ── enable ──▶ Idle
//! ```
//!
//! Every transition is a no-op while [`Disabled`](InteractionState::Disabled).
//! Re-enabling always lands on [`Idle`](InteractionState::Idle); the dispatcher re-derives
//! hover from the next pointer event.
//!
//! ## Implementing a control
//!
//! A control embeds a [`WidgetCore`] and implements [`Widget`].
//! The default hook implementations drive the core state machine, so most controls only
//! override the hooks that carry their own semantics and call through to the core.
//! The transition methods on [`WidgetCore`] are crate-private, so interaction state only
//! changes through dispatch and the enable/visibility setters on the root.
//! The dispatcher talks only to this trait, never to a concrete control type.

use alloc::vec::Vec;
use core::any::Any;
use core::fmt::Debug;

use kurbo::{Point, Rect, Vec2};

use crate::geometry::HitCandidate;
use crate::types::{Capabilities, InteractionState, Key, Modifiers, UiEvent, WidgetId};

/// Data shared by every widget: identity, geometry, flags, and interaction state.
///
/// Typed access to a registered widget cannot drive its state machine:
///
/// ```compile_fail
/// use understory_widget::controls::Button;
/// use understory_widget::geometry::rect;
/// use understory_widget::{UiRoot, Widget, WidgetId};
///
/// let mut ui = UiRoot::new();
/// let b = ui.register(Button::new(WidgetId(1), rect(0.0, 0.0, 10.0, 10.0))).unwrap();
/// ui.get_mut::<Button>(b).unwrap().core_mut().begin_gesture();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetCore {
    id: WidgetId,
    bounds: Rect,
    z_order: i32,
    enabled: bool,
    visible: bool,
    state: InteractionState,
    capabilities: Capabilities,
}

impl WidgetCore {
    /// Create an enabled, visible, idle core at z-order `0`.
    ///
    /// Bounds are validated when the widget is registered, not here.
    pub fn new(id: WidgetId, bounds: Rect, capabilities: Capabilities) -> Self {
        Self {
            id,
            bounds,
            z_order: 0,
            enabled: true,
            visible: true,
            state: InteractionState::Idle,
            capabilities,
        }
    }

    /// Builder-style z-order.
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.z_order = z_order;
        self
    }

    /// Widget identifier.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Bounds in root coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Stacking order; higher is hit first.
    pub fn z_order(&self) -> i32 {
        self.z_order
    }

    /// Whether the widget is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the widget is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Capability set.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Whether hit testing may select this widget.
    pub fn is_pickable(&self) -> bool {
        self.visible && self.enabled && !self.capabilities.is_empty()
    }

    pub(crate) fn hit_candidate(&self, seq: u64) -> HitCandidate {
        HitCandidate {
            id: self.id,
            bounds: self.bounds,
            z_order: self.z_order,
            seq,
            pickable: self.is_pickable(),
        }
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub(crate) fn set_z_order(&mut self, z_order: i32) {
        self.z_order = z_order;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible && self.enabled {
            self.state = InteractionState::Idle;
        }
    }

    /// Toggle enablement. Disabling forces [`Disabled`](InteractionState::Disabled);
    /// enabling always resets to [`Idle`](InteractionState::Idle).
    /// Returns true if the flag changed.
    pub(crate) fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        self.state = if enabled {
            InteractionState::Idle
        } else {
            InteractionState::Disabled
        };
        true
    }

    /// `Idle → Hovered`. Returns true if the state changed.
    pub(crate) fn enter(&mut self) -> bool {
        self.transition(InteractionState::Idle, InteractionState::Hovered)
    }

    /// `Hovered → Idle`. Returns true if the state changed.
    pub(crate) fn leave(&mut self) -> bool {
        self.transition(InteractionState::Hovered, InteractionState::Idle)
    }

    /// Start a gesture: `Dragging` for draggable widgets, else `Pressed` for clickable ones.
    ///
    /// Widgets with neither capability, and disabled widgets, are left unchanged.
    pub(crate) fn begin_gesture(&mut self) -> InteractionState {
        if self.state != InteractionState::Disabled {
            if self.capabilities.contains(Capabilities::DRAGGABLE) {
                self.state = InteractionState::Dragging;
            } else if self.capabilities.contains(Capabilities::CLICKABLE) {
                self.state = InteractionState::Pressed;
            }
        }
        self.state
    }

    /// End an active gesture, returning to `Idle`. Returns the state the gesture held.
    pub(crate) fn end_gesture(&mut self) -> InteractionState {
        let prev = self.state;
        if prev.is_active() {
            self.state = InteractionState::Idle;
        }
        prev
    }

    fn transition(&mut self, from: InteractionState, to: InteractionState) -> bool {
        if self.state == from {
            self.state = to;
            true
        } else {
            false
        }
    }
}

/// The contract every control implements.
///
/// Hooks are invoked only by the dispatcher, only on enabled widgets, and only in the
/// situations described on each method. Semantic events are pushed onto `events`.
pub trait Widget: Any + Debug {
    /// Shared widget data.
    fn core(&self) -> &WidgetCore;

    /// Shared widget data, mutably.
    fn core_mut(&mut self) -> &mut WidgetCore;

    /// The pointer started hovering this widget.
    fn on_pointer_enter(&mut self) {
        self.core_mut().enter();
    }

    /// The pointer stopped hovering this widget.
    fn on_pointer_leave(&mut self) {
        self.core_mut().leave();
    }

    /// A gesture started on this widget at `pos`.
    fn on_press(&mut self, pos: Point) {
        let _ = pos;
        self.core_mut().begin_gesture();
    }

    /// The gesture holding this widget ended at `pos`.
    ///
    /// `inside` reports whether `pos` is within the widget's current bounds; a release
    /// outside cancels a pending click but still ends the gesture.
    fn on_release(&mut self, pos: Point, inside: bool) {
        let _ = (pos, inside);
        self.core_mut().end_gesture();
    }

    /// Pointer motion while [`Dragging`](InteractionState::Dragging). Draggable widgets only.
    fn on_drag(&mut self, delta: Vec2, events: &mut Vec<UiEvent>) {
        let _ = (delta, events);
    }

    /// A key press routed to this widget as the focus owner. Editable widgets only.
    fn on_key(&mut self, key: Key, modifiers: Modifiers, events: &mut Vec<UiEvent>) {
        let _ = (key, modifiers, events);
    }

    /// Committed text routed to this widget as the focus owner. Editable widgets only.
    fn on_text(&mut self, text: &str, events: &mut Vec<UiEvent>) {
        let _ = (text, events);
    }

    /// Whether this widget can own keyboard focus.
    fn accepts_focus(&self) -> bool {
        let core = self.core();
        core.is_enabled() && core.capabilities().contains(Capabilities::EDITABLE)
    }

    /// Short human-readable name of the control kind, for logging.
    fn kind(&self) -> &'static str {
        "widget"
    }
}
