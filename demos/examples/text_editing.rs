// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus and text editing.
//!
//! Clicking a field focuses it; keys go only to the focused field. Pressing empty space or
//! `Escape` drops focus. A handler disables the submit button while the field is empty,
//! using deferred changes.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_widget_demos --example text_editing`

use understory_widget::controls::{Button, TextInput};
use understory_widget::geometry::rect;
use understory_widget::registry::Deferred;
use understory_widget::types::{Key, Modifiers};
use understory_widget::{InputEvent, UiEvent, UiRoot, WidgetId};

fn main() {
    env_logger::init();

    let mut ui = UiRoot::new();
    let name = ui
        .register(TextInput::new(WidgetId(1), rect(0.0, 0.0, 200.0, 24.0)))
        .expect("register field");
    let submit = ui
        .register(Button::new(WidgetId(2), rect(0.0, 40.0, 80.0, 24.0)).with_label("OK"))
        .expect("register button");
    ui.set_enabled(submit, false).expect("known id");

    let mut log = Vec::new();
    let mut handler = |e: &UiEvent, deferred: &mut Deferred| {
        if let UiEvent::TextChanged { new_content, .. } = e {
            deferred.set_enabled(submit, !new_content.is_empty());
        }
        log.push(e.clone());
    };

    let select_all = InputEvent::KeyDown {
        key: Key::Character('a'),
        modifiers: Modifiers::CTRL,
    };
    let script = [
        // Ignored: nothing is focused yet.
        InputEvent::text("lost"),
        InputEvent::pointer_down(10.0, 10.0),
        InputEvent::pointer_up(10.0, 10.0),
        InputEvent::text("Ada Lovelace"),
        select_all,
        InputEvent::text("Grace"),
        InputEvent::key(Key::Backspace),
        InputEvent::key(Key::Enter),
        InputEvent::key(Key::Escape),
        InputEvent::text("also lost"),
    ];
    for e in &script {
        ui.dispatch(e, &mut handler);
    }

    println!("== Events ==");
    for e in &log {
        println!("  {:?}", e);
    }

    let field = ui.get::<TextInput>(name).expect("text input");
    println!("  final text: {:?}", field.text());
    assert_eq!(field.text(), "Grac");
    assert_eq!(ui.focused(), None);
    assert!(ui.widget(submit).expect("button").core().is_enabled());
    assert!(log.contains(&UiEvent::Submitted {
        widget_id: name,
        content: "Grac".into()
    }));
}
