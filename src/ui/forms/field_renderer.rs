//! Field rendering utilities for forms

use crate::contact::ContactRequest;
use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Per-draw flags for a field
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldState {
    pub is_active: bool,
    pub has_error: bool,
    pub is_locked: bool,
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FormField,
    request: &ContactRequest,
    state: FieldState,
) {
    let accent = if state.has_error {
        Color::Red
    } else if state.is_active && !state.is_locked {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let display_value = field.display_value(request);
    let value_style = if state.is_locked {
        Style::default().fg(Color::DarkGray)
    } else if state.is_active {
        Style::default().fg(Color::White)
    } else if display_value.is_empty() || display_value == "Not set" {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
    let show_cursor = state.is_active && !state.is_locked;

    let content = match field.kind {
        FieldKind::Multiline => {
            let mut lines: Vec<Line> = display_value
                .split('\n')
                .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
                .collect();
            if show_cursor {
                if let Some(last) = lines.last_mut() {
                    last.spans.push(cursor);
                }
            }
            Paragraph::new(lines)
        }
        FieldKind::Text => {
            let mut spans = vec![Span::styled(display_value, value_style)];
            if show_cursor {
                spans.push(cursor);
            }
            Paragraph::new(Line::from(spans))
        }
        FieldKind::Choice(_) | FieldKind::Priority => {
            let arrow = Style::default().fg(accent).add_modifier(Modifier::BOLD);
            if show_cursor {
                Paragraph::new(Line::from(vec![
                    Span::styled("◀ ", arrow),
                    Span::styled(display_value, value_style),
                    Span::styled(" ▶", arrow),
                ]))
            } else {
                Paragraph::new(Line::from(Span::styled(display_value, value_style)))
            }
        }
    };

    let title = if state.has_error {
        format!(" {} · required ", field.label())
    } else {
        format!(" {} ", field.label())
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    if state.is_active {
        if let Some(description) = field.description(request) {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {description} "),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
