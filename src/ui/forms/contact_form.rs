//! Contact form rendering

use super::field_renderer::{draw_field, FieldState};
use crate::app::App;
use crate::contact::{ContactField, QuickAction};
use crate::state::{form_fields, FormButton};
use crate::ui::components::{render_action_button, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw the form with its action panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(48),    // Form area
            Constraint::Length(30), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

struct FieldAreas {
    rows: [Rect; 6],
    pairs: [[Rect; 2]; 2],
    selections: [Rect; 3],
}

impl FieldAreas {
    fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Project type
                Constraint::Length(3), // Name | Email
                Constraint::Length(3), // Company | Phone
                Constraint::Length(3), // Subject
                Constraint::Min(5),    // Message
                Constraint::Length(3), // Budget | Timeline | Priority
            ])
            .split(area);

        let halves = |row: Rect| {
            let parts = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(row);
            [parts[0], parts[1]]
        };
        let thirds = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[5]);

        Self {
            rows: [rows[0], rows[1], rows[2], rows[3], rows[4], rows[5]],
            pairs: [halves(rows[1]), halves(rows[2])],
            selections: [thirds[0], thirds[1], thirds[2]],
        }
    }

    fn area_for(&self, field: ContactField) -> Rect {
        match field {
            ContactField::ProjectType => self.rows[0],
            ContactField::Name => self.pairs[0][0],
            ContactField::Email => self.pairs[0][1],
            ContactField::Company => self.pairs[1][0],
            ContactField::Phone => self.pairs[1][1],
            ContactField::Subject => self.rows[3],
            ContactField::Message => self.rows[4],
            ContactField::Budget => self.selections[0],
            ContactField::Timeline => self.selections[1],
            ContactField::Priority => self.selections[2],
        }
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let form_focused = !form.is_buttons_row_active() && !form.is_submitting();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let areas = FieldAreas::split(inner);
    for (index, field) in form_fields().enumerate() {
        let state = FieldState {
            is_active: form.active_field_index == index,
            has_error: app.state.has_field_error(field.field),
            is_locked: form.is_submitting(),
        };
        draw_field(
            frame,
            areas.area_for(field.field),
            field,
            form.request(),
            state,
        );
    }
}

fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_buttons_row_active();

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Send
            Constraint::Length(BUTTON_HEIGHT), // Clear
            Constraint::Length(1),
            Constraint::Min(0), // Templates and direct contact
        ])
        .split(inner);

    let send_label = if form.is_submitting() {
        let frame_index = app.spinner_tick / 4 % SPINNER.len();
        format!("{} Sending...", SPINNER[frame_index])
    } else {
        FormButton::Send.label().to_string()
    };
    render_action_button(
        frame,
        chunks[0],
        &send_label,
        is_focused && form.selected_button == FormButton::Send,
        !form.is_submitting(),
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[1],
        FormButton::Clear.label(),
        is_focused && form.selected_button == FormButton::Clear,
        !form.is_submitting(),
    );

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled(
        "Quick templates",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (index, action) in QuickAction::ALL.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("F{} ", index + 1), key_style),
            Span::raw(action.label()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Prefer email?",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        app.owner_email().to_string(),
        Style::default().fg(Color::Blue),
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        chunks[3],
    );
}
