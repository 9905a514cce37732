//! Pure layout transition function.
//!
//! `apply(layout, action) -> layout'` is the only way layout values change.
//! The action set is a closed sum type, so an unhandled action kind cannot
//! exist at runtime; the compiler enforces exhaustiveness.

use super::{Category, DashboardLayout};

/// A committed layout edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutAction {
    /// Replace the entire layout atomically (full-layout editor confirm).
    ReplaceLayout {
        /// The complete new category list.
        categories: Vec<Category>,
    },
    /// Replace one category's widget list verbatim (per-category confirm).
    ///
    /// The list is taken as-is, including order; deduplication is the
    /// caller's responsibility. A `category_id` not present in the layout
    /// makes this a value-preserving no-op; category addition goes through
    /// `ReplaceLayout`.
    ReplaceCategoryWidgets {
        /// Target category id.
        category_id: String,
        /// New ordered widget-id list.
        widget_ids: Vec<String>,
    },
    /// Remove every occurrence of one widget from one category.
    ///
    /// A no-op when the category or the widget id is absent.
    RemoveWidget {
        /// Target category id.
        category_id: String,
        /// Widget id to remove.
        widget_id: String,
    },
}

/// Applies an action to a layout, producing the next layout value.
///
/// The input layout is never mutated; categories not targeted by the action
/// are carried over unchanged by value.
pub fn apply(layout: &DashboardLayout, action: &LayoutAction) -> DashboardLayout {
    match action {
        LayoutAction::ReplaceLayout { categories } => DashboardLayout {
            categories: categories.clone(),
        },
        LayoutAction::ReplaceCategoryWidgets {
            category_id,
            widget_ids,
        } => DashboardLayout {
            categories: layout
                .categories
                .iter()
                .map(|cat| {
                    if cat.id == *category_id {
                        Category {
                            widget_ids: widget_ids.clone(),
                            ..cat.clone()
                        }
                    } else {
                        cat.clone()
                    }
                })
                .collect(),
        },
        LayoutAction::RemoveWidget {
            category_id,
            widget_id,
        } => DashboardLayout {
            categories: layout
                .categories
                .iter()
                .map(|cat| {
                    if cat.id == *category_id {
                        Category {
                            widget_ids: cat
                                .widget_ids
                                .iter()
                                .filter(|id| *id != widget_id)
                                .cloned()
                                .collect(),
                            ..cat.clone()
                        }
                    } else {
                        cat.clone()
                    }
                })
                .collect(),
        },
    }
}
