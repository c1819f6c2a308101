// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concrete controls.
//!
//! - [`Button`]: clickable, no state beyond its interaction state.
//! - [`Label`]: inert text; never a hit-test target.
//! - [`Slider`]: draggable, maps thumb position on its track to a clamped value.
//! - [`TextInput`]: editable single-line buffer with cursor and selection.

mod button;
mod label;
mod slider;
mod text_input;

pub use button::Button;
pub use label::Label;
pub use slider::{Axis, Slider};
pub use text_input::TextInput;
