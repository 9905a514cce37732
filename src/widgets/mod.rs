//! Widget renderer dispatch for the posture dashboard.
//!
//! This module defines the [`Renderer`] capability trait and the
//! [`RendererRegistry`] that maps a widget descriptor's declared renderer
//! key to a concrete view implementation.
//!
//! # Architecture
//!
//! The layout and selection logic never depend on what a widget visually
//! renders: the dashboard view resolves the descriptor's `renderer_key`
//! through the registry at draw time and hands the renderer a frame area.
//! Unknown or missing keys resolve to the placeholder renderer, so a
//! dangling reference degrades to "no data" instead of failing.
//!
//! All widget data is static mock data baked into the renderer
//! implementations; renderers receive nothing from the layout beyond the
//! descriptor itself.

pub mod cloud_accounts;
pub mod image_risk;
pub mod image_security;
pub mod placeholder;
pub mod risk_assessment;

use crate::catalog::WidgetDescriptor;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};
use std::collections::HashMap;

/// Capability trait for widget content renderers.
///
/// Each renderer draws one widget's inner content (the card chrome around it
/// belongs to the dashboard view). Renderers must be thread-safe
/// (`Send + Sync`).
pub trait Renderer: Send + Sync {
    /// The renderer key this implementation serves.
    fn key(&self) -> &'static str;

    /// Draws the widget content into `area`.
    fn render(&self, descriptor: &WidgetDescriptor, frame: &mut Frame, area: Rect);
}

/// Factory function type for creating renderer instances.
pub type RendererFactory = fn() -> Box<dyn Renderer>;

/// Registry mapping renderer keys to factory functions.
///
/// Pre-populated with the built-in chart renderers and the placeholder.
/// `resolve` never fails: unmapped keys fall back to the placeholder.
#[derive(Debug)]
pub struct RendererRegistry {
    factories: HashMap<&'static str, RendererFactory>,
}

impl RendererRegistry {
    /// Creates a registry with the built-in renderers.
    ///
    /// Registered keys: `cloud-accounts`, `risk-assessment`, `image-risk`,
    /// `image-security`, `placeholder`.
    pub fn new() -> Self {
        let mut reg = Self {
            factories: HashMap::new(),
        };
        reg.register("cloud-accounts", || {
            Box::new(cloud_accounts::CloudAccountsRenderer)
        });
        reg.register("risk-assessment", || {
            Box::new(risk_assessment::RiskAssessmentRenderer)
        });
        reg.register("image-risk", || Box::new(image_risk::ImageRiskRenderer));
        reg.register("image-security", || {
            Box::new(image_security::ImageSecurityRenderer)
        });
        reg.register("placeholder", || {
            Box::new(placeholder::PlaceholderRenderer)
        });
        reg
    }

    /// Registers a renderer factory, overwriting any existing one.
    pub fn register(&mut self, key: &'static str, factory: RendererFactory) {
        self.factories.insert(key, factory);
    }

    /// Resolves a renderer key to an instance.
    ///
    /// Unknown keys resolve to the placeholder renderer.
    pub fn resolve(&self, key: &str) -> Box<dyn Renderer> {
        match self.factories.get(key) {
            Some(factory) => factory(),
            None => {
                tracing::debug!(key, "no renderer registered, using placeholder");
                Box::new(placeholder::PlaceholderRenderer)
            }
        }
    }

    /// All registered renderer keys. Order is not guaranteed.
    pub fn known_keys(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Shared chart primitives
// ---------------------------------------------------------------------------

/// A colored legend entry: `■ Label (value)`.
pub(crate) fn legend_line(color: Color, label: &str, value: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled("■ ", Style::default().fg(color)),
        Span::raw(format!("{label} ({value})")),
    ])
}

/// A horizontal stacked bar filling `width` columns proportionally.
///
/// Every segment with a non-zero value gets at least one column so small
/// slices stay visible; remaining columns go to the largest segment.
pub(crate) fn stacked_bar(segments: &[(u64, Color)], width: u16) -> Line<'static> {
    let total: u64 = segments.iter().map(|(v, _)| v).sum();
    let width = width as usize;
    if total == 0 || width == 0 {
        return Line::raw("");
    }

    let mut cols: Vec<usize> = segments
        .iter()
        .map(|(v, _)| {
            if *v == 0 {
                0
            } else {
                (((*v as u128) * (width as u128)) / (total as u128)).max(1) as usize
            }
        })
        .collect();

    // Rounding can over- or under-shoot; settle the difference on the
    // largest segment.
    let assigned: usize = cols.iter().sum();
    if let Some(largest) = segments
        .iter()
        .enumerate()
        .max_by_key(|(_, (v, _))| *v)
        .map(|(i, _)| i)
    {
        if assigned > width {
            cols[largest] = cols[largest].saturating_sub(assigned - width);
        } else {
            cols[largest] += width - assigned;
        }
    }

    let spans = segments
        .iter()
        .zip(cols)
        .filter(|(_, c)| *c > 0)
        .map(|((_, color), c)| Span::styled("█".repeat(c), Style::default().fg(*color)))
        .collect::<Vec<_>>();
    Line::from(spans)
}
