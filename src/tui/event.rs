//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.
//! Key events are translated into [`Action`]s; every layout mutation leaves
//! this module as a [`LayoutAction`] dispatched by the event loop.

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

use crate::layout::reducer::LayoutAction;
use crate::tui::app::{App, Overlay};

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    ///
    /// Uses `tokio::select!` to race between crossterm input and the tick timer.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore mouse, focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Dispatch a layout action to the store.
    Dispatch(LayoutAction),
}

/// Handles a key event by dispatching to the appropriate app method or action.
///
/// When an editor overlay is open, keys are routed to the overlay first;
/// dashboard navigation only applies with no overlay. Ctrl-C quits from
/// anywhere.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    // Global: Ctrl-C always quits, even inside an editor
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return Action::Quit;
    }

    match app.overlay {
        Overlay::FullEditor(_) => handle_full_editor_key(app, key),
        Overlay::CategoryEditor(_) => handle_category_editor_key(app, key),
        Overlay::None => handle_dashboard_key(app, key),
    }
}

/// Key handling for the dashboard with no overlay open.
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => {
            app.focus_next_category();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.focus_prev_category();
            Action::None
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.focus_next_widget();
            Action::None
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.focus_prev_widget();
            Action::None
        }
        KeyCode::Char('x') => match app.remove_focused_widget_action() {
            Some(action) => Action::Dispatch(action),
            None => Action::None,
        },
        KeyCode::Char('a') => {
            app.open_category_editor();
            Action::None
        }
        KeyCode::Char('e') => {
            app.open_full_editor();
            Action::None
        }
        KeyCode::Esc => {
            app.defocus();
            Action::None
        }
        _ => Action::None,
    }
}

/// Key handling while the tabbed full-layout editor is open.
fn handle_full_editor_key(app: &mut App, key: KeyEvent) -> Action {
    let Overlay::FullEditor(ref mut editor) = app.overlay else {
        return Action::None;
    };
    let tab_count = app.catalog.groups().len();
    match key.code {
        KeyCode::Tab | KeyCode::Right => {
            editor.next_tab(tab_count);
            Action::None
        }
        KeyCode::BackTab | KeyCode::Left => {
            editor.prev_tab(tab_count);
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let rows = match app.catalog.groups().get(editor.tab_index()) {
                Some(group) => app.catalog.widgets_in_group(&group.key).count(),
                None => 0,
            };
            editor.move_cursor_down(rows);
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            editor.move_cursor_up();
            Action::None
        }
        KeyCode::Char(' ') => {
            if let Some(group) = app.catalog.groups().get(editor.tab_index()) {
                let widget_id = app
                    .catalog
                    .widgets_in_group(&group.key)
                    .nth(editor.cursor())
                    .map(|w| w.id.clone());
                if let Some(id) = widget_id {
                    editor.toggle(&group.category_id, &id);
                }
            }
            Action::None
        }
        KeyCode::Enter => {
            let action = editor.confirm(&app.catalog, app.store.layout());
            app.overlay = Overlay::None;
            Action::Dispatch(action)
        }
        KeyCode::Esc => {
            // Cancel: pending selections are discarded with the editor
            app.overlay = Overlay::None;
            Action::None
        }
        _ => Action::None,
    }
}

/// Key handling while the single-category add-widget dialog is open.
///
/// Space toggles the highlighted match and never reaches the search box;
/// every other character feeds the search term, and cursor movement uses
/// the arrow keys only.
fn handle_category_editor_key(app: &mut App, key: KeyEvent) -> Action {
    let Overlay::CategoryEditor(ref mut editor) = app.overlay else {
        return Action::None;
    };
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            Action::None
        }
        KeyCode::Enter => {
            let action = editor.confirm(&app.catalog);
            app.overlay = Overlay::None;
            Action::Dispatch(action)
        }
        KeyCode::Backspace => {
            editor.pop_search();
            Action::None
        }
        KeyCode::Down => {
            let rows = editor.matches(&app.catalog).count();
            editor.move_cursor_down(rows);
            Action::None
        }
        KeyCode::Up => {
            editor.move_cursor_up();
            Action::None
        }
        KeyCode::Char(' ') => {
            let widget_id = editor
                .matches(&app.catalog)
                .nth(editor.cursor())
                .map(|w| w.id.clone());
            if let Some(id) = widget_id {
                editor.toggle(&id);
            }
            Action::None
        }
        KeyCode::Char(c) => {
            editor.push_search(c);
            Action::None
        }
        _ => Action::None,
    }
}
