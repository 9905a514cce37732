//! TOML configuration schema types for the posture dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults via
//! `#[serde(default)]`. Duration fields use human-readable strings (e.g.
//! `"250ms"`, `"1s"`) parsed by the `humantime` crate at the call site.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::layout::{Category, DashboardLayout};

/// Fallback render tick rate when the configured value fails to parse.
const FALLBACK_TICK_RATE: Duration = Duration::from_millis(250);

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [ui]
/// [log]
/// [[layout.categories]]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// TUI appearance and behavior settings.
    pub ui: UiConfig,
    /// Logging settings.
    pub log: LogConfig,
    /// Initial dashboard layout override.
    pub layout: LayoutSeedConfig,
}

impl Config {
    /// The render tick rate as a parsed duration.
    ///
    /// Falls back to 250ms with a warning when the configured string does
    /// not parse as a duration.
    pub fn tick_rate(&self) -> Duration {
        match humantime::parse_duration(&self.ui.tick_rate) {
            Ok(d) => d,
            Err(_) => {
                tracing::warn!(
                    value = %self.ui.tick_rate,
                    "invalid ui.tick_rate, falling back to 250ms"
                );
                FALLBACK_TICK_RATE
            }
        }
    }

    /// The initial dashboard layout from the `[layout]` section.
    ///
    /// An empty `categories` list means the built-in seed layout. Duplicate
    /// category ids, and duplicate widget ids within one category, keep the
    /// first occurrence and log a warning.
    pub fn seed_layout(&self) -> DashboardLayout {
        if self.layout.categories.is_empty() {
            return DashboardLayout::default_seed();
        }
        let mut seen = std::collections::HashSet::new();
        let mut categories = Vec::new();
        for seed in &self.layout.categories {
            if !seen.insert(seed.id.as_str()) {
                tracing::warn!(id = %seed.id, "duplicate layout category id, keeping first");
                continue;
            }
            let mut seen_widgets = std::collections::HashSet::new();
            let mut widget_ids = Vec::new();
            for widget_id in &seed.widgets {
                if !seen_widgets.insert(widget_id.as_str()) {
                    tracing::warn!(
                        category = %seed.id,
                        widget = %widget_id,
                        "duplicate widget id in seeded category, keeping first"
                    );
                    continue;
                }
                widget_ids.push(widget_id.clone());
            }
            categories.push(Category {
                id: seed.id.clone(),
                title: seed.title.clone(),
                widget_ids,
            });
        }
        DashboardLayout::new(categories)
    }
}

// ---------------------------------------------------------------------------
// UI
// ---------------------------------------------------------------------------

/// TUI behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging configuration from the TOML `[log]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity.
    pub level: LogLevel,
    /// Path to log file. Empty string means logging stays off while the
    /// TUI owns the terminal.
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// The `tracing` filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Layout seed
// ---------------------------------------------------------------------------

/// Initial dashboard layout from the TOML `[layout]` section.
///
/// An empty `categories` list means the built-in seed layout is used.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LayoutSeedConfig {
    /// Categories to seed the dashboard with, in display order.
    pub categories: Vec<CategorySeed>,
}

/// One seeded dashboard category.
///
/// Example TOML:
/// ```toml
/// [[layout.categories]]
/// id = "cat_cspm"
/// title = "CSPM Executive Dashboard"
/// widgets = ["widget_cloud_accounts"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CategorySeed {
    /// Stable category identifier.
    pub id: String,
    /// Section heading shown on the dashboard.
    pub title: String,
    /// Widget ids displayed in this category, in order.
    pub widgets: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
