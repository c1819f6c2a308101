// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragging a slider, and capture.
//!
//! The slider keeps pointer capture for the whole drag, so moving far outside its track
//! pins the value at the end instead of hovering other widgets.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_widget_demos --example slider_drag`

use understory_widget::controls::{Axis, Button, Slider};
use understory_widget::geometry::rect;
use understory_widget::types::InteractionState;
use understory_widget::{InputEvent, UiEvent, UiRoot, WidgetId};

fn main() {
    env_logger::init();

    let mut ui = UiRoot::new();
    let volume = ui
        .register(
            Slider::new(WidgetId(1), rect(0.0, 0.0, 200.0, 20.0), 0.0, 100.0, 0.0)
                .expect("valid range")
                .with_thumb_extent(12.0),
        )
        .expect("register slider");
    let mute = ui
        .register(Button::new(WidgetId(2), rect(0.0, 40.0, 60.0, 24.0)).with_label("Mute"))
        .expect("register button");
    let balance = ui
        .register(
            Slider::new(WidgetId(3), rect(220.0, 0.0, 20.0, 120.0), -1.0, 1.0, 0.0)
                .expect("valid range"),
        )
        .expect("register vertical slider");

    let drag = [
        InputEvent::pointer_down(0.0, 10.0),
        InputEvent::pointer_move(50.0, 10.0),
        InputEvent::pointer_move(100.0, 10.0),
        InputEvent::pointer_move(100.0, 50.0),
        InputEvent::pointer_move(900.0, 50.0),
        InputEvent::pointer_up(900.0, 50.0),
    ];
    let events = ui.dispatch_all(&drag);
    println!("== Horizontal drag ==");
    for e in &events {
        println!("  {:?}", e);
    }
    let values: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            UiEvent::ValueChanged { new_value, .. } => Some(*new_value),
            _ => None,
        })
        .collect();
    assert_eq!(values, vec![25.0, 50.0, 100.0]);
    assert_eq!(ui.state(mute), Some(InteractionState::Idle));

    let slider = ui.get::<Slider>(volume).expect("slider");
    println!("  thumb at {:?}", slider.thumb_rect());

    println!("== Vertical drag ==");
    let vertical = ui.get::<Slider>(balance).expect("slider");
    assert_eq!(vertical.axis(), Axis::Vertical);
    let events = ui.dispatch_all(&[
        InputEvent::pointer_down(230.0, 60.0),
        InputEvent::pointer_move(230.0, 30.0),
        InputEvent::pointer_up(230.0, 30.0),
    ]);
    for e in &events {
        println!("  {:?}", e);
    }
    assert_eq!(
        events,
        vec![UiEvent::ValueChanged {
            widget_id: balance,
            new_value: 0.5
        }]
    );
}
