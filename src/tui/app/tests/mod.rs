pub(crate) use super::*;
pub(crate) use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

mod interaction;

pub(crate) fn make_app() -> App {
    App::new(&Config::default())
}

pub(crate) fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub(crate) fn press(app: &mut App, code: KeyCode) -> Action {
    let action = handle_key_event(app, key(code));
    if let Action::Dispatch(layout_action) = &action {
        app.store.dispatch(layout_action.clone());
        app.clamp_focus();
    }
    action
}
