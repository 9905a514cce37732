//! Main rendering orchestration for the TUI dashboard.
//!
//! Provides the top-level `render_dashboard` function that composes the
//! header, category sections, and footer, and draws the editor overlays as
//! centered modals on top.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};
use std::time::Instant;

use crate::catalog::WidgetDescriptor;
use crate::editor::{CategoryEditor, FullLayoutEditor};
use crate::tui::app::{App, Overlay};

/// Header text displayed at the top of the dashboard.
const HEADER_TEXT: &str = "CNAPP Dashboard";

/// Footer text showing available keybindings.
const FOOTER_TEXT: &str =
    "[j/k] Category  [h/l] Widget  [a] Add Widget  [e] Edit Layout  [x] Remove  [q] Quit";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Renders the full dashboard: header, category sections, footer, and any
/// open editor overlay on top.
pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(3),    // category sections
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_categories(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);

    match &app.overlay {
        Overlay::FullEditor(editor) => render_full_editor(frame, app, editor, area),
        Overlay::CategoryEditor(editor) => render_category_editor(frame, app, editor, area),
        Overlay::None => {}
    }
}

/// Header with title (left) and version (right-aligned).
fn render_header(frame: &mut Frame, area: Rect) {
    let header_width = area.width as usize;
    let available_space = header_width.saturating_sub(HEADER_TEXT.len());
    let padding_len = available_space.saturating_sub(VERSION_TEXT.len());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(HEADER_TEXT, Style::default().fg(Color::Cyan)),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(VERSION_TEXT, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Stacked category sections, each with its row of widget cards.
fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let categories = &app.store.layout().categories;
    if categories.is_empty() {
        let empty = Paragraph::new("No categories configured")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let count = categories.len() as u32;
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, count); categories.len()])
        .split(area);

    for (idx, (category, section)) in categories.iter().zip(sections.iter()).enumerate() {
        let focused = app.focused_category == Some(idx);
        render_category_section(frame, app, category, *section, focused);
    }
}

/// One category: a title line above a horizontal row of widget cards plus
/// the trailing add-widget slot.
fn render_category_section(
    frame: &mut Frame,
    app: &App,
    category: &crate::layout::Category,
    area: Rect,
    focused: bool,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let title_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(category.title.clone(), title_style)),
        rows[0],
    );

    // Widget cards plus one trailing slot for the add-widget hint
    let slot_count = category.widget_ids.len() + 1;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, slot_count as u32);
            slot_count
        ])
        .split(rows[1]);

    for (widget_idx, widget_id) in category.widget_ids.iter().enumerate() {
        let card_focused = focused && app.focused_widget == widget_idx;
        render_widget_card(frame, app, widget_id, cards[widget_idx], card_focused);
    }
    render_add_slot(frame, cards[slot_count - 1]);
}

/// A bordered widget card. The content comes from the renderer registry; a
/// widget id the catalog does not know renders as a placeholder card titled
/// with the raw id.
fn render_widget_card(frame: &mut Frame, app: &App, widget_id: &str, area: Rect, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    match app.catalog.get(widget_id) {
        Some(descriptor) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(descriptor.title.clone());
            let inner = block.inner(area);
            frame.render_widget(block, area);
            app.renderers
                .resolve(&descriptor.renderer_key)
                .render(descriptor, frame, inner);
        }
        None => {
            // Dangling reference from a seeded layout: degrade to "no data"
            let descriptor = WidgetDescriptor::new(widget_id, widget_id, "", "placeholder");
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(widget_id.to_string());
            let inner = block.inner(area);
            frame.render_widget(block, area);
            app.renderers
                .resolve("placeholder")
                .render(&descriptor, frame, inner);
        }
    }
}

/// The trailing "+ Add Widget" slot at the end of each category row.
fn render_add_slot(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height > 0 {
        let hint_area = Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        };
        let hint = Paragraph::new("+ Add Widget")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

/// Footer with keybinding hints, overridden by an active status message.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some((msg, expiry)) if Instant::now() < *expiry => Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Yellow),
        )),
        _ => Line::from(Span::styled(
            FOOTER_TEXT,
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

// ---------------------------------------------------------------------------
// Editor overlays
// ---------------------------------------------------------------------------

/// Tabbed full-layout editor modal.
fn render_full_editor(frame: &mut Frame, app: &App, editor: &FullLayoutEditor, area: Rect) {
    let modal = centered_rect(60, 70, area);
    frame.render_widget(Clear, modal);

    let block = Block::default().borders(Borders::ALL).title("Edit Layout");
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Min(1),    // widget rows
            Constraint::Length(1), // hint
        ])
        .split(inner);

    let titles: Vec<Line> = app
        .catalog
        .groups()
        .iter()
        .map(|g| Line::from(g.key.clone()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(editor.tab_index())
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    let mut rows: Vec<Line> = Vec::new();
    if let Some(group) = app.catalog.groups().get(editor.tab_index()) {
        for (row_idx, widget) in app.catalog.widgets_in_group(&group.key).enumerate() {
            rows.push(selection_row(
                editor.is_selected(&group.category_id, &widget.id),
                &widget.title,
                row_idx == editor.cursor(),
            ));
        }
    }
    frame.render_widget(Paragraph::new(rows), chunks[1]);

    let hint = Paragraph::new("[Tab] Category  [Space] Toggle  [Enter] Confirm  [Esc] Cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[2]);
}

/// Single-category add-widget dialog with its search box.
fn render_category_editor(frame: &mut Frame, app: &App, editor: &CategoryEditor, area: Rect) {
    let modal = centered_rect(50, 60, area);
    frame.render_widget(Clear, modal);

    let category_title = app
        .store
        .layout()
        .category(editor.category_id())
        .map(|c| c.title.clone())
        .unwrap_or_else(|| editor.category_id().to_string());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Add Widget: {category_title}"));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // search box
            Constraint::Min(1),    // filtered rows
            Constraint::Length(1), // hint
        ])
        .split(inner);

    let search = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::raw(editor.search().to_string()),
    ]));
    frame.render_widget(search, chunks[0]);

    let rows: Vec<Line> = editor
        .matches(&app.catalog)
        .enumerate()
        .map(|(row_idx, widget)| {
            selection_row(
                editor.is_selected(&widget.id),
                &widget.title,
                row_idx == editor.cursor(),
            )
        })
        .collect();
    if rows.is_empty() {
        let none = Paragraph::new("No widgets match").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(none, chunks[1]);
    } else {
        frame.render_widget(Paragraph::new(rows), chunks[1]);
    }

    let hint = Paragraph::new("[Space] Toggle  [Enter] Confirm  [Esc] Cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[2]);
}

/// A `[x] Title` checkbox row with cursor highlight.
fn selection_row(selected: bool, title: &str, at_cursor: bool) -> Line<'static> {
    let checkbox = if selected { "[x] " } else { "[ ] " };
    let style = if at_cursor {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(Span::styled(format!("{checkbox}{title}"), style))
}

/// A centered rectangle taking the given percentages of the outer area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
