//! Cloud accounts connectivity summary.

use super::{legend_line, stacked_bar, Renderer};
use crate::catalog::WidgetDescriptor;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONNECTED: u64 = 2;
const NOT_CONNECTED: u64 = 2;

const CONNECTED_COLOR: Color = Color::Blue;
const NOT_CONNECTED_COLOR: Color = Color::DarkGray;

/// Connected vs. not-connected cloud account counts with a share bar.
pub struct CloudAccountsRenderer;

impl Renderer for CloudAccountsRenderer {
    fn key(&self) -> &'static str {
        "cloud-accounts"
    }

    fn render(&self, _descriptor: &WidgetDescriptor, frame: &mut Frame, area: Rect) {
        let total = CONNECTED + NOT_CONNECTED;
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    total.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Total accounts"),
            ]),
            stacked_bar(
                &[
                    (CONNECTED, CONNECTED_COLOR),
                    (NOT_CONNECTED, NOT_CONNECTED_COLOR),
                ],
                area.width.saturating_sub(2),
            ),
            legend_line(CONNECTED_COLOR, "Connected", CONNECTED),
            legend_line(NOT_CONNECTED_COLOR, "Not Connected", NOT_CONNECTED),
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
            "widget_cloud_accounts",
            "Cloud Accounts",
            "CSPM",
            "cloud-accounts",
        );
        let text = render_to_text(40, 6, |frame| {
            CloudAccountsRenderer.render(&descriptor, frame, frame.area());
        });
        assert!(text.contains("4 Total accounts"));
        assert!(text.contains("Connected (2)"));
        assert!(text.contains("Not Connected (2)"));
    }
}
