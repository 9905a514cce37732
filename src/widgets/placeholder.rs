//! Fallback renderer for widgets without chart data.

use super::Renderer;
use crate::catalog::WidgetDescriptor;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Renders "No graph data available" centered in the card.
///
/// Used both for widgets that declare the `placeholder` key and as the
/// fallback for unmapped renderer keys and dangling widget references.
pub struct PlaceholderRenderer;

impl Renderer for PlaceholderRenderer {
    fn key(&self) -> &'static str {
        "placeholder"
    }

    fn render(&self, _descriptor: &WidgetDescriptor, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        // Vertically center the message within the card body.
        let message_area = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        let paragraph = Paragraph::new("No graph data available")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, message_area);
    }
}
