//! Single source of truth for the live layout.
//!
//! The store owns the current [`DashboardLayout`] value and replaces it
//! atomically on every dispatch. A monotonically increasing version counter
//! is the change-notification mechanism: the dashboard view compares the
//! version it last rendered against the current one instead of holding a
//! subscription callback into the store.

use super::reducer::{self, LayoutAction};
use super::DashboardLayout;

/// Owns the current layout value and applies dispatched actions.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    layout: DashboardLayout,
    version: u64,
}

impl LayoutStore {
    /// Creates a store holding the given seed layout at version zero.
    pub fn new(seed: DashboardLayout) -> Self {
        Self {
            layout: seed,
            version: 0,
        }
    }

    /// The current layout value.
    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// The current change counter. Bumped on every dispatch.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies an action through the reducer and swaps in the new layout.
    ///
    /// The swap is atomic from the view's perspective: no partially updated
    /// layout is ever observable, because the reducer builds the complete
    /// next value before this method replaces the old one.
    pub fn dispatch(&mut self, action: LayoutAction) {
        tracing::debug!(?action, "dispatching layout action");
        self.layout = reducer::apply(&self.layout, &action);
        self.version = self.version.wrapping_add(1);
    }
}
