/*
[INPUT]:  Crossterm key events
[OUTPUT]: Panel switches, form edits, and spawned submissions
[POS]:    TUI key routing
[UPDATE]: When keybindings change
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use lendbridge_console::{AppState, ChannelSink, FormBindings, Panel};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(
    app: &mut AppState,
    key: KeyEvent,
    bindings: &FormBindings,
    sink: &ChannelSink,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return true,
            KeyCode::Left => app.tabs.previous(),
            KeyCode::Right => app.tabs.next(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::F(number @ 1..=5) => {
            app.select_panel(Panel::ALL[usize::from(number - 1)]);
        }
        KeyCode::Enter => submit_active_form(app, bindings, sink),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.active_form_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.active_form_mut() {
                form.focus_previous();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.active_form_mut() {
                form.pop_char();
            }
        }
        KeyCode::Esc => {
            if let Some(form) = app.active_form_mut() {
                form.clear();
            }
        }
        KeyCode::Char(ch) => {
            if let Some(form) = app.active_form_mut() {
                form.push_char(ch);
            }
        }
        _ => {}
    }
    false
}

fn submit_active_form(app: &mut AppState, bindings: &FormBindings, sink: &ChannelSink) {
    let Some(form) = app.active_form() else {
        return;
    };
    let action = app.active_action();
    let fields = form.values();
    bindings.spawn_submit(action, fields, sink.clone());
    app.status_message = format!("{action}: request sent");
}
