//! Selection editors: transient, dialog-scoped staging of widget membership.
//!
//! Both editor variants follow the same lifecycle: open copies the relevant
//! slice of the live layout into an editor-local pending selection (a
//! defensive copy, never an alias of store state), toggles mutate only that
//! copy, confirm converts the copy into exactly one [`LayoutAction`], and
//! cancel drops the copy with no observable effect on the store. Re-opening
//! always re-seeds from the store, so no state leaks across sessions.
//!
//! [`LayoutAction`]: crate::layout::reducer::LayoutAction

pub mod category;
pub mod full;

pub use category::CategoryEditor;
pub use full::FullLayoutEditor;

use std::collections::BTreeSet;

/// Symmetric-difference update of a selection set.
///
/// Toggling the same id twice restores the original set.
pub(crate) fn toggle_membership(set: &mut BTreeSet<String>, widget_id: &str) {
    if !set.remove(widget_id) {
        set.insert(widget_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = BTreeSet::new();
        toggle_membership(&mut set, "w1");
        assert!(set.contains("w1"));
        toggle_membership(&mut set, "w1");
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_twice_is_involution() {
        let mut set: BTreeSet<String> = ["w1".to_string(), "w2".to_string()].into_iter().collect();
        let before = set.clone();
        toggle_membership(&mut set, "w2");
        toggle_membership(&mut set, "w2");
        assert_eq!(set, before);
    }
}
