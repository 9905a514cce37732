//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.
//! All layout mutations flow through the [`LayoutStore`]; the app itself
//! only tracks view concerns: focus, the active editor overlay, and the
//! transient status message.

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::editor::{CategoryEditor, FullLayoutEditor};
use crate::layout::reducer::LayoutAction;
use crate::layout::store::LayoutStore;
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render_dashboard;
use crate::widgets::RendererRegistry;

/// How long a transient footer status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(2);

/// The modal editor currently covering the dashboard, if any.
///
/// At most one editor is open at a time. Each editor owns its pending
/// selection state, so closing an overlay discards everything uncommitted.
#[derive(Debug, Clone)]
pub enum Overlay {
    /// No overlay; the dashboard has keyboard focus.
    None,
    /// Tabbed editor covering the whole layout.
    FullEditor(FullLayoutEditor),
    /// Search dialog scoped to one category.
    CategoryEditor(CategoryEditor),
}

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Static widget registry: descriptors and category groups.
    pub catalog: Catalog,
    /// Single source of truth for the live layout.
    pub store: LayoutStore,
    /// Maps renderer keys to widget content implementations.
    pub renderers: RendererRegistry,
    /// Active modal editor, if any.
    pub overlay: Overlay,
    /// Index of the focused category in the layout, if any.
    pub focused_category: Option<usize>,
    /// Index of the focused widget within the focused category.
    pub focused_widget: usize,
    /// Temporary status message shown in footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Count of ticks processed (useful for testing/diagnostics).
    pub tick_count: u64,
    /// Render tick rate from configuration.
    tick_rate: Duration,
}

impl App {
    /// Creates a new App seeded from the configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            catalog: Catalog::builtin(),
            store: LayoutStore::new(config.seed_layout()),
            renderers: RendererRegistry::new(),
            overlay: Overlay::None,
            focused_category: None,
            focused_widget: 0,
            status_message: None,
            tick_count: 0,
            tick_rate: config.tick_rate(),
        }
    }

    /// The id of the focused category, if any.
    pub fn focused_category_id(&self) -> Option<&str> {
        let idx = self.focused_category?;
        self.store
            .layout()
            .categories
            .get(idx)
            .map(|c| c.id.as_str())
    }

    /// Moves the category focus down by one, clamped to the last category.
    ///
    /// Resets the widget focus when the category changes.
    pub fn focus_next_category(&mut self) {
        let count = self.store.layout().categories.len();
        if count == 0 {
            return;
        }
        let new_idx = self.focused_category.map_or(0, |i| (i + 1).min(count - 1));
        if self.focused_category != Some(new_idx) {
            self.focused_widget = 0;
        }
        self.focused_category = Some(new_idx);
    }

    /// Moves the category focus up by one, clamped to index 0.
    pub fn focus_prev_category(&mut self) {
        if self.store.layout().categories.is_empty() {
            return;
        }
        let new_idx = self.focused_category.map_or(0, |i| i.saturating_sub(1));
        if self.focused_category != Some(new_idx) {
            self.focused_widget = 0;
        }
        self.focused_category = Some(new_idx);
    }

    /// Moves the widget focus right within the focused category.
    pub fn focus_next_widget(&mut self) {
        if let Some(count) = self.focused_widget_count() {
            if count > 0 {
                self.focused_widget = (self.focused_widget + 1).min(count - 1);
            }
        }
    }

    /// Moves the widget focus left within the focused category.
    pub fn focus_prev_widget(&mut self) {
        self.focused_widget = self.focused_widget.saturating_sub(1);
    }

    /// Clears category and widget focus.
    pub fn defocus(&mut self) {
        self.focused_category = None;
        self.focused_widget = 0;
    }

    fn focused_widget_count(&self) -> Option<usize> {
        let idx = self.focused_category?;
        self.store
            .layout()
            .categories
            .get(idx)
            .map(|c| c.widget_ids.len())
    }

    /// Re-clamps focus after the layout changed underneath it.
    pub fn clamp_focus(&mut self) {
        let categories = &self.store.layout().categories;
        match self.focused_category {
            Some(idx) if idx >= categories.len() => {
                self.focused_category = if categories.is_empty() {
                    None
                } else {
                    Some(categories.len() - 1)
                };
            }
            _ => {}
        }
        if let Some(count) = self.focused_widget_count() {
            self.focused_widget = self.focused_widget.min(count.saturating_sub(1));
        } else {
            self.focused_widget = 0;
        }
    }

    /// Builds the removal action for the focused widget, if one is focused.
    pub fn remove_focused_widget_action(&self) -> Option<LayoutAction> {
        let category = self
            .store
            .layout()
            .categories
            .get(self.focused_category?)?;
        let widget_id = category.widget_ids.get(self.focused_widget)?.clone();
        Some(LayoutAction::RemoveWidget {
            category_id: category.id.clone(),
            widget_id,
        })
    }

    /// Opens the tabbed full-layout editor.
    ///
    /// The initial tab is the group mapped to the focused category, or the
    /// first tab with no focus. The editor re-seeds from the live layout on
    /// every open.
    pub fn open_full_editor(&mut self) {
        let initial_tab = self
            .focused_category_id()
            .and_then(|id| {
                self.catalog
                    .groups()
                    .iter()
                    .position(|g| g.category_id == id)
            })
            .unwrap_or(0);
        self.overlay = Overlay::FullEditor(FullLayoutEditor::open(
            &self.catalog,
            self.store.layout(),
            initial_tab,
        ));
    }

    /// Opens the add-widget dialog for the focused category.
    ///
    /// Falls back to the first layout category when nothing is focused.
    pub fn open_category_editor(&mut self) {
        let target = self
            .focused_category_id()
            .map(str::to_string)
            .or_else(|| {
                self.store
                    .layout()
                    .categories
                    .first()
                    .map(|c| c.id.clone())
            });
        match target {
            Some(id) => {
                self.overlay =
                    Overlay::CategoryEditor(CategoryEditor::open(self.store.layout(), &id));
            }
            None => self.set_status("No categories to add widgets to"),
        }
    }

    /// Shows a transient footer message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message if its expiry time has passed.
    ///
    /// Returns `true` when a message was cleared, meaning the footer needs a
    /// redraw.
    pub fn expire_status_message(&mut self) -> bool {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        // Initial draw before the first event arrives
        terminal.draw(|frame| render_dashboard(frame, self))?;

        loop {
            let event = event_handler.next(&mut reader).await?;
            let should_render = match event {
                Event::Key(key) => {
                    match handle_key_event(self, key) {
                        Action::Quit => {
                            self.should_quit = true;
                            return Ok(());
                        }
                        Action::Dispatch(action) => {
                            self.store.dispatch(action);
                            self.clamp_focus();
                        }
                        Action::None => {}
                    }
                    true // Input events always render immediately
                }
                Event::Resize(_, _) => true,
                Event::Tick => {
                    self.tick_count += 1;
                    // Widget data is static, so a tick only needs a redraw
                    // when an expired status message must leave the footer.
                    self.expire_status_message()
                }
            };

            if should_render {
                terminal.draw(|frame| render_dashboard(frame, self))?;
            }
        }
    }
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests;
