//! Image vulnerability risk summary.

use super::{legend_line, stacked_bar, Renderer};
use crate::catalog::WidgetDescriptor;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CRITICAL: u64 = 4;
const HIGH: u64 = 752;
const LOW: u64 = 714;

/// Severity breakdown of registry image vulnerabilities.
pub struct ImageRiskRenderer;

impl Renderer for ImageRiskRenderer {
    fn key(&self) -> &'static str {
        "image-risk"
    }

    fn render(&self, _descriptor: &WidgetDescriptor, frame: &mut Frame, area: Rect) {
        let total = CRITICAL + HIGH + LOW;
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    total.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Total vulnerabilities"),
            ]),
            stacked_bar(
                &[
                    (CRITICAL, Color::Red),
                    (HIGH, Color::Yellow),
                    (LOW, Color::Blue),
                ],
                area.width.saturating_sub(2),
            ),
            legend_line(Color::Red, "Critical", CRITICAL),
            legend_line(Color::Yellow, "High", HIGH),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}
