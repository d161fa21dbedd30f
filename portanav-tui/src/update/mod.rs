//! Message handling

use std::time::Instant;

use portanav_core::InputEvent;

use crate::message::AppMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: AppMessage, now: Instant) {
    match msg {
        AppMessage::Quit => app.should_quit = true,
        AppMessage::Input(event) => {
            // A release anywhere ends the press, even off the pressed
            // entry; touch delivers the release to the element the press
            // started on.
            if matches!(event, InputEvent::SwipeEnd { .. }) {
                release_pressed(app, now);
            }
            app.router.handle_input(event, now);
        }
        AppMessage::MenuClick { section_id } => {
            // A click is a release followed by an activation, as a touch
            // tap would deliver them.
            release_pressed(app, now);
            app.router
                .handle_input(InputEvent::MenuActivate { section_id }, now);
        }
        AppMessage::HistoryBack => match app.history.back() {
            Some(payload) => {
                app.router.handle_pop(Some(&payload), now);
            }
            None => app.set_status("No hay historial anterior"),
        },
        AppMessage::HistoryForward => match app.history.forward() {
            Some(payload) => {
                app.router.handle_pop(Some(&payload), now);
            }
            None => app.set_status("No hay historial posterior"),
        },
        AppMessage::Resize(width) => {
            app.shell.set_viewport_width(width);
            app.router.handle_resize(now);
        }
        AppMessage::ScrollContent(delta) => app.shell.scroll_by(delta),
        AppMessage::Noop => {}
    }
}

/// Release the entry the last press landed on, if any.
fn release_pressed(app: &mut App, now: Instant) {
    if let Some(section_id) = app.shell.view().pressed_menu {
        app.router
            .handle_input(InputEvent::TouchRelease { section_id }, now);
    }
}
