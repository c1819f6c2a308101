// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the engine: identifiers, interaction state, capabilities, and the
//! inbound/outbound event vocabularies.
//!
//! ## Overview
//!
//! [`InputEvent`] values flow in from the host loop, [`UiEvent`] values flow out to the
//! application. Everything in between is referenced by [`WidgetId`].

use alloc::string::String;
use kurbo::Point;

/// Application-chosen identifier of a widget, unique within one [`UiRoot`](crate::root::UiRoot).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct WidgetId(pub u32);

impl core::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pointer-derived interaction state of a widget.
///
/// Exactly one value holds per widget at any time.
/// [`Disabled`](InteractionState::Disabled) overrides every pointer-derived transition.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum InteractionState {
    /// No pointer interaction.
    #[default]
    Idle,
    /// The pointer is over the widget and no gesture is active.
    Hovered,
    /// A clickable widget is held down by the active gesture.
    Pressed,
    /// A draggable widget is being dragged by the active gesture.
    Dragging,
    /// The widget is disabled and rejects all transitions.
    Disabled,
}

impl InteractionState {
    /// Returns true while a gesture holds the widget ([`Pressed`](Self::Pressed) or [`Dragging`](Self::Dragging)).
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pressed | Self::Dragging)
    }
}

bitflags::bitflags! {
    /// Interaction capabilities of a widget.
    ///
    /// A widget with no capabilities is inert: it is never a hit-test target.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Press-then-release-inside emits [`UiEvent::Clicked`].
        const CLICKABLE = 0b0000_0001;
        /// Pointer motion during a gesture is delivered as drag deltas.
        const DRAGGABLE = 0b0000_0010;
        /// Accepts keyboard focus and receives key and text input.
        const EDITABLE  = 0b0000_0100;
    }
}

bitflags::bitflags! {
    /// Keyboard modifier state carried by [`InputEvent::KeyDown`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Super key.
        const META  = 0b0000_1000;
    }
}

/// Pointer button identifiers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PointerButton {
    /// Left mouse button, pen contact, or touch.
    #[default]
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
}

/// Logical keys the engine understands.
///
/// Printable input arrives through [`InputEvent::TextInput`], not as keys.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Cursor left.
    ArrowLeft,
    /// Cursor right.
    ArrowRight,
    /// Start of line.
    Home,
    /// End of line.
    End,
    /// Delete backwards.
    Backspace,
    /// Delete forwards.
    Delete,
    /// Submit.
    Enter,
    /// Drop keyboard focus.
    Escape,
    /// Tab key.
    Tab,
    /// A character key, used for shortcuts such as `Ctrl+A`.
    Character(char),
}

/// Raw input supplied by the host loop, one dispatch call per value.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The pointer moved.
    PointerMove {
        /// New pointer position.
        position: Point,
    },
    /// A pointer button went down.
    PointerDown {
        /// Pointer position.
        position: Point,
        /// Button pressed.
        button: PointerButton,
    },
    /// A pointer button went up.
    PointerUp {
        /// Pointer position.
        position: Point,
        /// Button released.
        button: PointerButton,
    },
    /// A key was pressed.
    KeyDown {
        /// Logical key.
        key: Key,
        /// Modifiers held at the time.
        modifiers: Modifiers,
    },
    /// Committed text (one or more characters) to insert.
    TextInput {
        /// The text.
        text: String,
    },
}

impl InputEvent {
    /// Convenience constructor for a pointer move.
    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove {
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a primary-button press.
    pub fn pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }

    /// Convenience constructor for a primary-button release.
    pub fn pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }

    /// Convenience constructor for a key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Convenience constructor for text input.
    pub fn text(text: &str) -> Self {
        Self::TextInput { text: text.into() }
    }
}

/// Semantic events emitted to the application.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// A clickable widget completed a press-then-release-inside cycle.
    Clicked {
        /// The clicked widget.
        widget_id: WidgetId,
    },
    /// A value-carrying widget changed its value.
    ValueChanged {
        /// The widget.
        widget_id: WidgetId,
        /// The new, clamped value.
        new_value: f64,
    },
    /// Keyboard focus moved.
    FocusChanged {
        /// Previously focused widget.
        old: Option<WidgetId>,
        /// Newly focused widget.
        new: Option<WidgetId>,
    },
    /// An edit buffer's content changed.
    TextChanged {
        /// The widget.
        widget_id: WidgetId,
        /// The full new content.
        new_content: String,
    },
    /// A text field was submitted with `Enter`.
    Submitted {
        /// The widget.
        widget_id: WidgetId,
        /// Content at submission time.
        content: String,
    },
}

impl UiEvent {
    /// The widget this event concerns, if any. For focus changes this is the new owner.
    pub fn widget_id(&self) -> Option<WidgetId> {
        match self {
            Self::Clicked { widget_id }
            | Self::ValueChanged { widget_id, .. }
            | Self::TextChanged { widget_id, .. }
            | Self::Submitted { widget_id, .. } => Some(*widget_id),
            Self::FocusChanged { new, .. } => *new,
        }
    }
}
