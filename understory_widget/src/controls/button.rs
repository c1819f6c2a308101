// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push button.

use alloc::string::String;

use kurbo::Rect;

use crate::types::{Capabilities, WidgetId};
use crate::widget::{Widget, WidgetCore};

/// A clickable button.
///
/// Clicks are detected by the dispatcher: one [`Clicked`](crate::types::UiEvent::Clicked)
/// per press that is released inside the bounds, none when released outside.
#[derive(Clone, Debug)]
pub struct Button {
    core: WidgetCore,
    label: String,
}

impl Button {
    /// Create a button with an empty caption.
    pub fn new(id: WidgetId, bounds: Rect) -> Self {
        Self {
            core: WidgetCore::new(id, bounds, Capabilities::CLICKABLE),
            label: String::new(),
        }
    }

    /// Builder-style caption.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.into();
        self
    }

    /// Builder-style z-order.
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.core = self.core.with_z_order(z_order);
        self
    }

    /// The caption.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the caption.
    pub fn set_label(&mut self, label: &str) {
        self.label = label.into();
    }
}

impl Widget for Button {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "button"
    }
}
