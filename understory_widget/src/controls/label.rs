// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static text.

use alloc::string::String;

use kurbo::Rect;

use crate::types::{Capabilities, WidgetId};
use crate::widget::{Widget, WidgetCore};

/// Non-interactive text.
///
/// Labels have no capabilities, so hit testing looks through them to whatever lies beneath.
#[derive(Clone, Debug)]
pub struct Label {
    core: WidgetCore,
    text: String,
}

impl Label {
    /// Create a label.
    pub fn new(id: WidgetId, bounds: Rect, text: &str) -> Self {
        Self {
            core: WidgetCore::new(id, bounds, Capabilities::empty()),
            text: text.into(),
        }
    }

    /// Builder-style z-order.
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.core = self.core.with_z_order(z_order);
        self
    }

    /// The text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "label"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect;

    #[test]
    fn label_is_inert() {
        let mut l = Label::new(WidgetId(1), rect(0.0, 0.0, 100.0, 20.0), "Name");
        assert!(!l.core().is_pickable());
        assert!(!l.accepts_focus());
        l.set_text("Email");
        assert_eq!(l.text(), "Email");
    }
}
