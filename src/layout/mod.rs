//! Dashboard layout: the live, mutable arrangement of categories.
//!
//! A layout is an ordered list of categories, each holding an ordered list
//! of widget-id references into the catalog. The layout is owned by the
//! [`store::LayoutStore`] and changes only through the pure
//! [`reducer::apply`] function.

pub mod reducer;
pub mod store;

/// One dashboard section holding an ordered list of widget references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique category id (e.g. `"cat_cspm"`).
    pub id: String,
    /// Section heading shown on the dashboard.
    pub title: String,
    /// Ordered widget ids; order is display order.
    pub widget_ids: Vec<String>,
}

impl Category {
    /// Creates a category from string slices.
    pub fn new(id: &str, title: &str, widget_ids: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            widget_ids: widget_ids.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The full ordered arrangement of dashboard categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Categories in display order.
    pub categories: Vec<Category>,
}

impl DashboardLayout {
    /// Creates a layout from a category list.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Looks up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// The built-in seed layout used when the config does not override it.
    pub fn default_seed() -> Self {
        Self::new(vec![
            Category::new(
                "cat_cspm",
                "CSPM Executive Dashboard",
                &["widget_cloud_accounts", "widget_cloud_risk"],
            ),
            Category::new("cat_cwpp", "CWPP Dashboard", &[]),
            Category::new(
                "cat_registry",
                "Registry Scan",
                &["widget_image_risk", "widget_image_security"],
            ),
        ])
    }
}
