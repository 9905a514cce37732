//! Cloud account risk assessment summary.

use super::{legend_line, stacked_bar, Renderer};
use crate::catalog::WidgetDescriptor;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// The headline total is reported independently of the segment breakdown.
const TOTAL_FINDINGS: u64 = 9659;

const SEGMENTS: [(&str, u64, Color); 4] = [
    ("Passed", 7253, Color::Green),
    ("Failed", 1089, Color::Red),
    ("Warning", 68, Color::Yellow),
    ("Not available", 38, Color::DarkGray),
];

/// Pass/fail/warning breakdown of cloud account risk findings.
pub struct RiskAssessmentRenderer;

impl Renderer for RiskAssessmentRenderer {
    fn key(&self) -> &'static str {
        "risk-assessment"
    }

    fn render(&self, _descriptor: &WidgetDescriptor, frame: &mut Frame, area: Rect) {
        let bar_segments: Vec<(u64, Color)> =
            SEGMENTS.iter().map(|(_, v, c)| (*v, *c)).collect();

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    TOTAL_FINDINGS.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Total findings"),
            ]),
            stacked_bar(&bar_segments, area.width.saturating_sub(2)),
        ];
        for (label, value, color) in SEGMENTS {
            lines.push(legend_line(color, label, value));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::testing::render_to_text;

    #[test]
    fn renders_total_and_all_segments() {
        let descriptor = WidgetDescriptor::new(
            "widget_cloud_risk",
            "Cloud Account Risk Assessment",
            "CSPM",
            "risk-assessment",
        );
        let text = render_to_text(44, 8, |frame| {
            RiskAssessmentRenderer.render(&descriptor, frame, frame.area());
        });
        assert!(text.contains("9659 Total findings"));
        assert!(text.contains("Passed (7253)"));
        assert!(text.contains("Failed (1089)"));
        assert!(text.contains("Warning (68)"));
        assert!(text.contains("Not available (38)"));
    }
}
