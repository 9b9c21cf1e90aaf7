//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod toasts;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);
    forms::draw_contact_form(frame, main_area, app);
    toasts::draw(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal errors on top of everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.error_queue.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DeliveryInfo;
    use crate::contact::ContactField;
    use crate::delivery::{DeliveryGuarantee, MockEmailDelivery};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app(guarantee: DeliveryGuarantee) -> App {
        App::with_delivery(
            Arc::new(MockEmailDelivery::new()),
            DeliveryInfo {
                name: "webhook",
                guarantee,
            },
            "owner@example.com",
            "owner@example.com",
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 36)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_fields_and_actions() {
        let screen = render(&app(DeliveryGuarantee::Confirmed));
        assert!(screen.contains("Project Type *"));
        assert!(screen.contains("Message *"));
        assert!(screen.contains("Send Message"));
        assert!(screen.contains("Book Consultation"));
        assert!(screen.contains("owner@example.com"));
    }

    #[test]
    fn test_status_bar_labels_best_effort_delivery() {
        let screen = render(&app(DeliveryGuarantee::BestEffort));
        assert!(screen.contains("webhook (best-effort)"));
    }

    #[test]
    fn test_status_bar_labels_simulated_delivery() {
        let screen = render(&app(DeliveryGuarantee::Simulated));
        assert!(screen.contains("webhook (simulated)"));
    }

    #[test]
    fn test_validation_message_replaces_hints() {
        let mut app = app(DeliveryGuarantee::Confirmed);
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("Please fill in:"));
        assert!(screen.contains("required"));
        assert!(app.state.has_field_error(ContactField::Email));
    }

    #[test]
    fn test_error_dialog_overlays_form() {
        let mut app = app(DeliveryGuarantee::Confirmed);
        app.push_error("Could not load configuration");
        let screen = render(&app);
        assert!(screen.contains("Could not load configuration"));
        assert!(screen.contains("to dismiss"));
    }
}
