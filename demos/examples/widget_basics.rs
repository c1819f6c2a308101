// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buttons, a label, and z-order.
//!
//! Two overlapping buttons share a label drawn on top. Pressing the overlap clicks only the
//! higher button; dragging off a button before releasing cancels its click.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_widget_demos --example widget_basics`

use understory_widget::controls::{Button, Label};
use understory_widget::geometry::rect;
use understory_widget::registry::Deferred;
use understory_widget::types::InteractionState;
use understory_widget::{InputEvent, UiEvent, UiRoot, WidgetId};

fn main() {
    env_logger::init();

    let mut ui = UiRoot::new();
    let back = ui
        .register(Button::new(WidgetId(1), rect(0.0, 0.0, 120.0, 40.0)).with_label("Back"))
        .expect("register back");
    let front = ui
        .register(
            Button::new(WidgetId(2), rect(60.0, 0.0, 120.0, 40.0))
                .with_label("Front")
                .with_z_order(1),
        )
        .expect("register front");
    // Labels are transparent to the pointer even when drawn on top.
    ui.register(Label::new(WidgetId(3), rect(0.0, 0.0, 180.0, 40.0), "caption").with_z_order(9))
        .expect("register label");

    let mut clicks = Vec::new();
    let mut handler = |e: &UiEvent, _: &mut Deferred| {
        log::info!("event: {:?}", e);
        if let UiEvent::Clicked { widget_id } = e {
            clicks.push(*widget_id);
        }
    };

    println!("== Hover across the overlap ==");
    for x in [10.0, 70.0, 150.0, 400.0] {
        ui.dispatch(&InputEvent::pointer_move(x, 20.0), &mut handler);
        println!(
            "  x={:>5}: hovered={:?} back={:?} front={:?}",
            x,
            ui.hovered(),
            ui.state(back),
            ui.state(front)
        );
    }

    println!("== Click the overlap ==");
    for e in [InputEvent::pointer_down(90.0, 20.0), InputEvent::pointer_up(90.0, 20.0)] {
        ui.dispatch(&e, &mut handler);
    }

    println!("== Press, drag away, release ==");
    for e in [
        InputEvent::pointer_down(20.0, 20.0),
        InputEvent::pointer_move(20.0, 200.0),
        InputEvent::pointer_up(20.0, 200.0),
    ] {
        ui.dispatch(&e, &mut handler);
    }

    println!("  clicks: {:?}", clicks);
    assert_eq!(clicks, vec![front]);
    assert_eq!(ui.state(back), Some(InteractionState::Idle));
}
