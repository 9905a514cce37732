//! Per-category selection editor: the "add widget" dialog with a search box.
//!
//! The editor is scoped to one category for its whole lifetime. The search
//! term filters the full catalog (not just the category's group) by
//! case-insensitive title substring, recomputed on every change. Confirm
//! replaces the single category's widget list.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, WidgetDescriptor};
use crate::layout::reducer::LayoutAction;
use crate::layout::DashboardLayout;

/// Pending state of the single-category add-widget dialog.
#[derive(Debug, Clone)]
pub struct CategoryEditor {
    /// Target category, fixed at open.
    category_id: String,
    /// Current search filter text.
    search: String,
    /// Highlighted row within the filtered list.
    cursor: usize,
    /// Pending selection for the target category.
    selection: BTreeSet<String>,
}

impl CategoryEditor {
    /// Opens the editor for one category, seeding from the live layout.
    ///
    /// The seed is a copy of the category's current widget ids; a category
    /// id absent from the layout seeds an empty selection. Every open call
    /// re-seeds, so state never survives a close.
    pub fn open(layout: &DashboardLayout, category_id: &str) -> Self {
        let selection = layout
            .category(category_id)
            .map(|c| c.widget_ids.iter().cloned().collect())
            .unwrap_or_default();
        Self {
            category_id: category_id.to_string(),
            search: String::new(),
            cursor: 0,
            selection,
        }
    }

    /// The category this editor commits to.
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    /// The current search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The highlighted row within the filtered list.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Appends a character to the search term and restarts the cursor.
    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.cursor = 0;
    }

    /// Removes the last character of the search term.
    pub fn pop_search(&mut self) {
        self.search.pop();
        self.cursor = 0;
    }

    /// The catalog widgets matching the current search term.
    ///
    /// Lazy and recomputed per call; filtering never touches the pending
    /// selection.
    pub fn matches<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = &'a WidgetDescriptor> + 'a {
        catalog.search(&self.search)
    }

    /// Returns `true` if the widget is in the pending selection.
    pub fn is_selected(&self, widget_id: &str) -> bool {
        self.selection.contains(widget_id)
    }

    /// Toggles one widget's membership in the pending selection.
    pub fn toggle(&mut self, widget_id: &str) {
        super::toggle_membership(&mut self.selection, widget_id);
    }

    /// The pending selection set.
    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    /// Moves the cursor down, clamped to the last filtered row.
    pub fn move_cursor_down(&mut self, row_count: usize) {
        if row_count > 0 {
            self.cursor = (self.cursor + 1).min(row_count - 1);
        }
    }

    /// Moves the cursor up, clamped to row zero.
    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Builds the single-category replacement action.
    ///
    /// The committed list follows catalog declaration order; selected ids
    /// unknown to the catalog are dropped.
    pub fn confirm(&self, catalog: &Catalog) -> LayoutAction {
        LayoutAction::ReplaceCategoryWidgets {
            category_id: self.category_id.clone(),
            widget_ids: catalog.ordered_selection(&self.selection),
        }
    }
}
