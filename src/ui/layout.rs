//! Layout components (header, status bar)

use crate::app::App;
use crate::delivery::DeliveryGuarantee;
use crate::platform::{COPY_LINK_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            " Get in touch ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· messages go to {}", app.owner_email()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Delivery backend, flagged when its success is not confirmed
    let (dot, color) = match app.delivery.guarantee {
        DeliveryGuarantee::Confirmed => (" ● ", Color::Green),
        DeliveryGuarantee::BestEffort => (" ◐ ", Color::Yellow),
        DeliveryGuarantee::Simulated => (" ○ ", Color::Yellow),
    };
    spans.push(Span::styled(dot, Style::default().fg(color)));
    spans.push(Span::styled(
        format!("{} ({})  ", app.delivery.name, app.delivery.guarantee.label()),
        Style::default().fg(color),
    ));

    if let Some(message) = &app.state.status_message {
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(
            view_hints(app),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let hint_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        y: area.y,
        width: hint_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current focus
fn view_hints(app: &App) -> String {
    let form = &app.state.form;
    if form.is_submitting() {
        return "Sending your message...".to_string();
    }

    let focus = match form.active_form_field() {
        None => "←/→:button  Enter:press",
        Some(field) if field.is_multiline() => "Enter:newline",
        Some(field) if field.accepts_text() => "Enter:next",
        Some(_) => "←/→/Space:choose",
    };
    format!(
        "Tab:next  {focus}  F1-F5:template  {SUBMIT_SHORTCUT}:send  {COPY_LINK_SHORTCUT}:copy link  ^R:clear"
    )
}
