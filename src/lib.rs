//! Posture Dashboard library
//!
//! This crate implements a terminal dashboard that renders categorized
//! security-posture widgets (cloud accounts, risk scores, image
//! vulnerabilities) and lets the user edit which widgets appear in which
//! categories through two dialog-driven flows.
//!
//! # Architecture
//!
//! Data flows one direction:
//!
//! - [`catalog`] holds the static registry of widget descriptors and their
//!   category groups. Read-only after construction.
//! - [`layout`] holds the live arrangement: an ordered list of categories,
//!   each with an ordered list of widget ids. The only way to change it is
//!   dispatching a [`layout::reducer::LayoutAction`] through the
//!   [`layout::store::LayoutStore`].
//! - [`editor`] provides the two transient selection editors (full tabbed
//!   layout edit and per-category add-widget). Editors stage a pending
//!   selection copied from the store on open and convert it into a single
//!   action on confirm; cancel discards it.
//! - [`widgets`] maps a widget's declared renderer key to a concrete view
//!   implementation, falling back to a placeholder for unknown keys.
//! - [`tui`] composes all of the above into the visible page and drives the
//!   event loop.

/// Static widget catalog and category grouping.
pub mod catalog;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Selection editors staging widget membership changes.
pub mod editor;

/// Layout state: categories, the pure reducer, and the store.
pub mod layout;

/// Tracing subscriber initialization.
pub mod logging;

/// TUI module providing the terminal user interface for the dashboard.
pub mod tui;

/// Widget renderer dispatch and the built-in renderers.
pub mod widgets;

pub use catalog::{Catalog, CatalogError, CategoryGroup, WidgetDescriptor};
pub use layout::{reducer::LayoutAction, store::LayoutStore, Category, DashboardLayout};
