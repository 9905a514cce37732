//! Terminal user interface for the posture dashboard.

/// Application state and main event loop.
pub mod app;

/// Event handling (keyboard, resize, ticks).
pub mod event;

/// Rendering functions for the dashboard and editor overlays.
pub mod ui;
