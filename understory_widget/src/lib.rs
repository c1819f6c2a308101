// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Widget: a retained-mode, `no_std` widget interaction engine.
//!
//! ## Overview
//!
//! This crate turns raw pointer and keyboard input into widget state transitions and semantic
//! events. It owns a flat set of widgets with rectangular bounds and a z-order, resolves which
//! one is under the pointer, tracks pointer capture and keyboard focus, and drives a small
//! interaction state machine per widget.
//! It does not render, lay out, or talk to a windowing system.
//!
//! ## Pieces
//!
//! - [`geometry`]: half-open rectangle containment and topmost-widget resolution.
//! - [`widget`]: the [`Widget`](crate::widget::Widget) contract and the shared
//!   [`WidgetCore`](crate::widget::WidgetCore) state machine.
//! - [`focus`]: the focus and capture record, with one coalesced
//!   [`FocusChanged`](crate::types::UiEvent::FocusChanged) per input event.
//! - [`dispatcher`]: [`UiRoot::dispatch`](crate::root::UiRoot::dispatch), which routes one input
//!   event to completion.
//! - [`controls`]: [`Button`](crate::controls::Button), [`Label`](crate::controls::Label),
//!   [`Slider`](crate::controls::Slider), and [`TextInput`](crate::controls::TextInput).
//!
//! ## Targeting
//!
//! Pointer events go to the captured widget during a press or drag gesture, and otherwise to
//! the topmost visible, enabled, interactive widget containing the point.
//! Higher z-order wins; equal z-order goes to the most recently registered widget.
//! Key and text events go to the focused widget if it is enabled and editable, and are
//! dropped otherwise.
//!
//! ## Workflow
//!
//! 1) Build widgets and hand them to a [`UiRoot`](crate::root::UiRoot).
//! 2) Feed it [`InputEvent`](crate::types::InputEvent)s as they arrive.
//! 3) React to the [`UiEvent`](crate::types::UiEvent)s delivered to your
//!    [`EventHandler`](crate::dispatcher::EventHandler). Structural changes made from inside a
//!    handler go through [`Deferred`](crate::registry::Deferred) and take effect once the
//!    current input event is done.
//!
//! ```
//! use understory_widget::controls::{Button, Slider};
//! use understory_widget::geometry::rect;
//! use understory_widget::registry::Deferred;
//! use understory_widget::root::UiRoot;
//! use understory_widget::types::{InputEvent, UiEvent, WidgetId};
//!
//! let mut ui = UiRoot::new();
//! let quit = ui.register(Button::new(WidgetId(1), rect(10.0, 10.0, 80.0, 24.0))).unwrap();
//! let volume = ui
//!     .register(Slider::new(WidgetId(2), rect(10.0, 50.0, 200.0, 20.0), 0.0, 1.0, 0.0).unwrap())
//!     .unwrap();
//!
//! let mut log = Vec::new();
//! let mut handler = |e: &UiEvent, deferred: &mut Deferred| {
//!     if let UiEvent::Clicked { widget_id } = e {
//!         deferred.set_enabled(*widget_id, false);
//!     }
//!     log.push(e.clone());
//! };
//!
//! for event in [
//!     InputEvent::pointer_down(20.0, 20.0),
//!     InputEvent::pointer_up(20.0, 20.0),
//!     InputEvent::pointer_down(10.0, 60.0),
//!     InputEvent::pointer_move(110.0, 60.0),
//!     InputEvent::pointer_up(110.0, 60.0),
//! ] {
//!     ui.dispatch(&event, &mut handler);
//! }
//!
//! assert_eq!(
//!     log,
//!     [
//!         UiEvent::Clicked { widget_id: quit },
//!         UiEvent::ValueChanged { widget_id: volume, new_value: 0.5 },
//!     ]
//! );
//! assert!(!ui.widget(quit).unwrap().core().is_enabled());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controls;
pub mod dispatcher;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod hover;
pub mod registry;
pub mod root;
pub mod types;
pub mod widget;

pub use error::{UiError, UiResult};
pub use root::UiRoot;
pub use types::{InputEvent, UiEvent, WidgetId};
pub use widget::{Widget, WidgetCore};
