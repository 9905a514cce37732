//! Full-layout selection editor: the tabbed "personalise your dashboard"
//! dialog with one tab per catalog group.
//!
//! On confirm it rebuilds the entire layout in one atomic action, covering
//! every catalog group. Groups whose category is absent from the current
//! layout are synthesized with the group's derived title, so a brand-new
//! category's first widget can be added through this flow.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Catalog;
use crate::layout::reducer::LayoutAction;
use crate::layout::{Category, DashboardLayout};

/// Pending state of the tabbed full-layout edit dialog.
#[derive(Debug, Clone)]
pub struct FullLayoutEditor {
    /// Active tab (index into the catalog's group list).
    tab_index: usize,
    /// Highlighted row within the active tab's checkbox list.
    cursor: usize,
    /// Pending selection: category id → selected widget ids.
    selection: BTreeMap<String, BTreeSet<String>>,
}

impl FullLayoutEditor {
    /// Opens the editor, seeding the pending selection from the live layout.
    ///
    /// Every catalog group gets a selection entry, seeded from the matching
    /// layout category when one exists and empty otherwise. `initial_tab` is
    /// clamped to the group count.
    pub fn open(catalog: &Catalog, layout: &DashboardLayout, initial_tab: usize) -> Self {
        let mut selection: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for cat in &layout.categories {
            selection.insert(cat.id.clone(), cat.widget_ids.iter().cloned().collect());
        }
        for group in catalog.groups() {
            selection.entry(group.category_id.clone()).or_default();
        }
        let tab_index = initial_tab.min(catalog.groups().len().saturating_sub(1));
        Self {
            tab_index,
            cursor: 0,
            selection,
        }
    }

    /// The active tab index.
    pub fn tab_index(&self) -> usize {
        self.tab_index
    }

    /// The highlighted row within the active tab.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advances to the next tab, wrapping around. Resets the cursor.
    pub fn next_tab(&mut self, tab_count: usize) {
        if tab_count > 0 {
            self.tab_index = (self.tab_index + 1) % tab_count;
            self.cursor = 0;
        }
    }

    /// Moves to the previous tab, wrapping around. Resets the cursor.
    pub fn prev_tab(&mut self, tab_count: usize) {
        if tab_count > 0 {
            self.tab_index = (self.tab_index + tab_count - 1) % tab_count;
            self.cursor = 0;
        }
    }

    /// Moves the cursor down, clamped to the last row.
    pub fn move_cursor_down(&mut self, row_count: usize) {
        if row_count > 0 {
            self.cursor = (self.cursor + 1).min(row_count - 1);
        }
    }

    /// Moves the cursor up, clamped to row zero.
    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Returns `true` if the widget is selected for the given category.
    pub fn is_selected(&self, category_id: &str, widget_id: &str) -> bool {
        self.selection
            .get(category_id)
            .is_some_and(|set| set.contains(widget_id))
    }

    /// Toggles one widget's membership in one category's pending set.
    ///
    /// Other categories' sets are untouched; toggling twice is a no-op.
    pub fn toggle(&mut self, category_id: &str, widget_id: &str) {
        let set = self.selection.entry(category_id.to_string()).or_default();
        super::toggle_membership(set, widget_id);
    }

    /// The pending selection for one category.
    pub fn selection(&self, category_id: &str) -> Option<&BTreeSet<String>> {
        self.selection.get(category_id)
    }

    /// Builds the atomic full-layout replacement action.
    ///
    /// The resulting layout covers every catalog group in declaration order.
    /// Existing categories keep their titles; absent ones are synthesized
    /// from the group definition. Each widget list follows catalog
    /// declaration order.
    pub fn confirm(&self, catalog: &Catalog, layout: &DashboardLayout) -> LayoutAction {
        let categories = catalog
            .groups()
            .iter()
            .map(|group| {
                let title = layout
                    .category(&group.category_id)
                    .map(|c| c.title.clone())
                    .unwrap_or_else(|| group.title.clone());
                let widget_ids = self
                    .selection
                    .get(&group.category_id)
                    .map(|set| catalog.ordered_selection(set))
                    .unwrap_or_default();
                Category {
                    id: group.category_id.clone(),
                    title,
                    widget_ids,
                }
            })
            .collect();
        LayoutAction::ReplaceLayout { categories }
    }
}
