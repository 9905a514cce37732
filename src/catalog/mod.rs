//! Static widget catalog.
//!
//! The catalog is the read-only registry of every widget the dashboard can
//! display, plus the declared category groups that the full-layout editor
//! tabs over. It is constructed once at startup and validated eagerly:
//! duplicate widget ids or references to undeclared groups are load-time
//! errors, not runtime surprises.
//!
//! Catalog declaration order is the deterministic ordering policy for editor
//! confirmation: when a pending selection set is committed, the resulting
//! widget list follows the order widgets were declared here.

use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Immutable description of one widget the dashboard can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    /// Unique, stable identifier.
    pub id: String,
    /// Human-readable title shown on the widget card and in editors.
    pub title: String,
    /// Category group key this widget belongs to (e.g. `"CSPM"`).
    pub category: String,
    /// Renderer key resolved through the renderer registry.
    pub renderer_key: String,
}

impl WidgetDescriptor {
    /// Creates a descriptor from string slices.
    pub fn new(id: &str, title: &str, category: &str, renderer_key: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            renderer_key: renderer_key.to_string(),
        }
    }
}

/// A declared category group.
///
/// Groups drive the full-layout editor tabs and supply the identity and
/// derived title for layout categories that do not exist yet when an edit
/// is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// Group key widgets reference via [`WidgetDescriptor::category`].
    pub key: String,
    /// Layout category id this group maps to (e.g. `"cat_cspm"`).
    pub category_id: String,
    /// Title used when a category must be synthesized for this group.
    pub title: String,
}

impl CategoryGroup {
    /// Creates a group from string slices.
    pub fn new(key: &str, category_id: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            category_id: category_id.to_string(),
            title: title.to_string(),
        }
    }
}

/// Errors detected while validating a catalog definition.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two widgets share the same id.
    #[error("duplicate widget id: {id}")]
    DuplicateWidgetId {
        /// The offending widget id.
        id: String,
    },

    /// Two groups share the same key.
    #[error("duplicate category group key: {key}")]
    DuplicateGroup {
        /// The offending group key.
        key: String,
    },

    /// A widget references a group that was never declared.
    #[error("widget '{widget_id}' references undeclared category group '{group}'")]
    UnknownGroup {
        /// Widget carrying the dangling reference.
        widget_id: String,
        /// The undeclared group key.
        group: String,
    },
}

/// The validated, read-only widget registry.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Widgets in declaration order.
    widgets: Vec<WidgetDescriptor>,
    /// Widget id → index into `widgets`.
    index: HashMap<String, usize>,
    /// Category groups in declaration order.
    groups: Vec<CategoryGroup>,
}

impl Catalog {
    /// Validates and builds a catalog from group and widget definitions.
    ///
    /// Fails fast on duplicate widget ids, duplicate group keys, and widgets
    /// referencing undeclared groups.
    pub fn new(
        groups: Vec<CategoryGroup>,
        widgets: Vec<WidgetDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut group_keys = BTreeSet::new();
        for group in &groups {
            if !group_keys.insert(group.key.clone()) {
                return Err(CatalogError::DuplicateGroup {
                    key: group.key.clone(),
                });
            }
        }

        let mut index = HashMap::with_capacity(widgets.len());
        for (i, widget) in widgets.iter().enumerate() {
            if index.insert(widget.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateWidgetId {
                    id: widget.id.clone(),
                });
            }
            if !group_keys.contains(&widget.category) {
                return Err(CatalogError::UnknownGroup {
                    widget_id: widget.id.clone(),
                    group: widget.category.clone(),
                });
            }
        }

        Ok(Self {
            widgets,
            index,
            groups,
        })
    }

    /// The built-in catalog of posture widgets.
    ///
    /// Widgets without a dedicated chart renderer use the `placeholder` key.
    pub fn builtin() -> Self {
        let groups = vec![
            CategoryGroup::new("CSPM", "cat_cspm", "CSPM Dashboard"),
            CategoryGroup::new("CWPP", "cat_cwpp", "CWPP Dashboard"),
            CategoryGroup::new("Image", "cat_registry", "Image Dashboard"),
            CategoryGroup::new("Ticket", "cat_ticket", "Ticket Dashboard"),
        ];
        let widgets = vec![
            WidgetDescriptor::new(
                "widget_cloud_accounts",
                "Cloud Accounts",
                "CSPM",
                "cloud-accounts",
            ),
            WidgetDescriptor::new(
                "widget_cloud_risk",
                "Cloud Account Risk Assessment",
                "CSPM",
                "risk-assessment",
            ),
            WidgetDescriptor::new(
                "widget_namespace_alerts",
                "Top 5 Namespace Specific Alerts",
                "CWPP",
                "placeholder",
            ),
            WidgetDescriptor::new(
                "widget_workload_alerts",
                "Workload Alerts",
                "CWPP",
                "placeholder",
            ),
            WidgetDescriptor::new(
                "widget_image_risk",
                "Image Risk Assessment",
                "Image",
                "image-risk",
            ),
            WidgetDescriptor::new(
                "widget_image_security",
                "Image Security Issues",
                "Image",
                "image-security",
            ),
            WidgetDescriptor::new(
                "widget_compliance_status",
                "Compliance Status",
                "CSPM",
                "placeholder",
            ),
            WidgetDescriptor::new("widget_ticket_1", "Ticket Widget 1", "Ticket", "placeholder"),
            WidgetDescriptor::new("widget_ticket_2", "Ticket Widget 2", "Ticket", "placeholder"),
        ];
        Self::new(groups, widgets).expect("built-in catalog definition is valid")
    }

    /// Looks up a widget by id.
    pub fn get(&self, id: &str) -> Option<&WidgetDescriptor> {
        self.index.get(id).map(|&i| &self.widgets[i])
    }

    /// Returns `true` if the catalog declares the given widget id.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All widgets in declaration order.
    pub fn widgets(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    /// All category groups in declaration order.
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Looks up a group by key.
    pub fn group(&self, key: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Looks up the group that maps to the given layout category id.
    pub fn group_for_category(&self, category_id: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.category_id == category_id)
    }

    /// Widgets belonging to the given group, in declaration order.
    pub fn widgets_in_group<'a>(
        &'a self,
        key: &'a str,
    ) -> impl Iterator<Item = &'a WidgetDescriptor> + 'a {
        self.widgets.iter().filter(move |w| w.category == key)
    }

    /// Case-insensitive substring search over widget titles.
    ///
    /// An empty term matches every widget. The returned iterator is lazy and
    /// recomputed from scratch on every call, so callers can re-run it for
    /// each keystroke of a search box.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a WidgetDescriptor> + 'a {
        let needle = term.to_lowercase();
        self.widgets
            .iter()
            .filter(move |w| needle.is_empty() || w.title.to_lowercase().contains(&needle))
    }

    /// Converts a selection set into an ordered widget-id list.
    ///
    /// The result follows catalog declaration order. Selected ids the catalog
    /// does not know (dangling references carried over from a seeded layout)
    /// are dropped.
    pub fn ordered_selection(&self, selected: &BTreeSet<String>) -> Vec<String> {
        self.widgets
            .iter()
            .filter(|w| selected.contains(&w.id))
            .map(|w| w.id.clone())
            .collect()
    }
}
