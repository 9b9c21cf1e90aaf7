//! Toast overlay in the top-right corner

use super::components::wrap_text;
use crate::app::App;
use crate::submission::NotificationKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 46;

fn accent(kind: NotificationKind) -> (Color, &'static str) {
    match kind {
        NotificationKind::Success => (Color::Green, "✓"),
        NotificationKind::Failure => (Color::Red, "✗"),
        NotificationKind::Info => (Color::Blue, "i"),
    }
}

/// Draw active toasts, newest on top
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width = TOAST_WIDTH.min(area.width);
    let text_width = width.saturating_sub(4) as usize;
    let mut y = area.y + 1;

    for toast in app.state.toasts.iter().rev() {
        let notification = &toast.notification;
        let (color, icon) = accent(notification.kind);

        let mut lines = vec![Line::from(Span::styled(
            format!("{icon} {}", notification.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        if !notification.description.is_empty() {
            lines.extend(
                wrap_text(&notification.description, text_width)
                    .into_iter()
                    .map(Line::from),
            );
        }

        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height,
        };

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(Color::Black)),
            ),
            toast_area,
        );
        y += height;
    }
}
