//! Image security issues summary.

use super::{legend_line, stacked_bar, Renderer};
use crate::catalog::WidgetDescriptor;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TOTAL_IMAGES: u64 = 2;
const CRITICAL: u64 = 1;
const HIGH: u64 = 2;

/// Count of scanned images with critical and high security issues.
pub struct ImageSecurityRenderer;

impl Renderer for ImageSecurityRenderer {
    fn key(&self) -> &'static str {
        "image-security"
    }

    fn render(&self, _descriptor: &WidgetDescriptor, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    TOTAL_IMAGES.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Total images"),
            ]),
            stacked_bar(
                &[(CRITICAL, Color::Red), (HIGH, Color::Yellow)],
                area.width.saturating_sub(2),
            ),
            legend_line(Color::Red, "Critical", CRITICAL),
            legend_line(Color::Yellow, "High", HIGH),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::testing::render_to_text;

    #[test]
    fn renders_total_and_legend() {
        let descriptor = WidgetDescriptor::new(
            "widget_image_security",
            "Image Security Issues",
            "Image",
            "image-security",
        );
        let text = render_to_text(40, 6, |frame| {
            ImageSecurityRenderer.render(&descriptor, frame, frame.area());
        });
        assert!(text.contains("2 Total images"));
        assert!(text.contains("Critical (1)"));
        assert!(text.contains("High (2)"));
    }
}
