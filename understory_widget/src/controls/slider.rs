// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-value slider.
//!
//! ## Mapping
//!
//! The track is the widget bounds. Its principal axis runs left→right for
//! [`Axis::Horizontal`] and bottom→top for [`Axis::Vertical`]. A thumb offset `d` along that
//! axis maps linearly from `[0, track length]` to `[min, max]` and is then clamped.
//!
//! A press grabs the thumb where it currently is; drag deltas move the grab point, which may
//! leave the track while the value stays clamped, so returning the pointer returns the thumb.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

use crate::error::{UiError, UiResult};
use crate::types::{Capabilities, InteractionState, UiEvent, WidgetId};
use crate::widget::{Widget, WidgetCore};

/// Principal axis of a slider track.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    /// Minimum on the left.
    Horizontal,
    /// Minimum at the bottom.
    Vertical,
}

/// A draggable value slider.
///
/// `min <= value <= max` holds after construction and after every update.
#[derive(Clone, Debug)]
pub struct Slider {
    core: WidgetCore,
    min: f64,
    max: f64,
    value: f64,
    axis: Axis,
    thumb_extent: Option<f64>,
    // Unclamped grab offset along the axis while dragging.
    grab: Option<f64>,
}

impl Slider {
    /// Create a slider over `[min, max]` with an initial value, clamped into range.
    ///
    /// The axis follows the longer side of `bounds`.
    pub fn new(id: WidgetId, bounds: Rect, min: f64, max: f64, value: f64) -> UiResult<Self> {
        check_range(min, max)?;
        let axis = if bounds.width() >= bounds.height() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        Ok(Self {
            core: WidgetCore::new(id, bounds, Capabilities::DRAGGABLE),
            min,
            max,
            value: clamp_value(value, min, max),
            axis,
            thumb_extent: None,
            grab: None,
        })
    }

    /// Builder-style axis override.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Builder-style thumb length along the axis. Defaults to the track's cross size.
    pub fn with_thumb_extent(mut self, extent: f64) -> Self {
        self.thumb_extent = Some(extent.max(0.0));
        self
    }

    /// Builder-style z-order.
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.core = self.core.with_z_order(z_order);
        self
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Principal axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Position of the value within the range, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        // Halved so that `max - min` cannot overflow for ranges wider than `f64::MAX`.
        let half_span = self.max / 2.0 - self.min / 2.0;
        if half_span > 0.0 {
            ((self.value / 2.0 - self.min / 2.0) / half_span).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// The track rectangle.
    pub fn track_rect(&self) -> Rect {
        self.core.bounds()
    }

    /// The thumb rectangle, centered on the value's position along the track.
    pub fn thumb_rect(&self) -> Rect {
        let track = self.track_rect();
        let offset = self.fraction() * self.track_len();
        match self.axis {
            Axis::Horizontal => {
                let half = self.thumb_extent.unwrap_or(track.height()) / 2.0;
                let cx = track.x0 + offset;
                Rect::new(cx - half, track.y0, cx + half, track.y1)
            }
            Axis::Vertical => {
                let half = self.thumb_extent.unwrap_or(track.width()) / 2.0;
                let cy = track.y1 - offset;
                Rect::new(track.x0, cy - half, track.x1, cy + half)
            }
        }
    }

    /// Set the value programmatically, clamped. Non-finite input is ignored.
    ///
    /// Returns true if the value changed. No event is emitted.
    pub fn set_value(&mut self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        let next = clamp_value(value, self.min, self.max);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Replace the range, re-clamping the value.
    pub fn set_range(&mut self, min: f64, max: f64) -> UiResult<()> {
        check_range(min, max)?;
        self.min = min;
        self.max = max;
        self.value = clamp_value(self.value, min, max);
        Ok(())
    }

    fn track_len(&self) -> f64 {
        let track = self.track_rect();
        match self.axis {
            Axis::Horizontal => track.width(),
            Axis::Vertical => track.height(),
        }
    }

    fn value_at(&self, offset: f64) -> f64 {
        let len = self.track_len();
        if len <= 0.0 {
            return self.value;
        }
        let t = (offset / len).clamp(0.0, 1.0);
        clamp_value(self.min * (1.0 - t) + self.max * t, self.min, self.max)
    }
}

fn check_range(min: f64, max: f64) -> UiResult<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(UiError::InvalidRange { min, max });
    }
    Ok(())
}

fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}

impl Widget for Slider {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "slider"
    }

    fn on_press(&mut self, _pos: Point) {
        if self.core.begin_gesture() == InteractionState::Dragging {
            self.grab = Some(self.fraction() * self.track_len());
        }
    }

    fn on_release(&mut self, _pos: Point, _inside: bool) {
        self.grab = None;
        self.core.end_gesture();
    }

    fn on_drag(&mut self, delta: Vec2, events: &mut Vec<UiEvent>) {
        if self.core.state() != InteractionState::Dragging {
            return;
        }
        let Some(grab) = self.grab else {
            return;
        };
        let step = match self.axis {
            Axis::Horizontal => delta.x,
            Axis::Vertical => -delta.y,
        };
        if !step.is_finite() {
            return;
        }
        let grab = grab + step;
        self.grab = Some(grab);
        let next = self.value_at(grab);
        if next != self.value {
            self.value = next;
            events.push(UiEvent::ValueChanged {
                widget_id: self.core.id(),
                new_value: next,
            });
        }
    }
}
