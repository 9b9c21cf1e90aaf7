//! Application state and core logic

use crate::config::ContactConfig;
use crate::contact::{mailto_link, ContactField, QuickAction};
use crate::delivery::{self, DeliveryGuarantee, EmailDelivery, MockDelivery};
use crate::state::{AppState, Form, FormButton};
use crate::submission::{
    CompletedSubmission, Notification, Notifier, SubmissionOrchestrator, SubmitError,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Second Ctrl+C within this window quits
const QUIT_WINDOW: Duration = Duration::from_secs(2);

/// Delivery details shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryInfo {
    pub name: &'static str,
    pub guarantee: DeliveryGuarantee,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    orchestrator: SubmissionOrchestrator,
    notifier: Notifier,
    notifications: mpsc::UnboundedReceiver<Notification>,
    completions_tx: mpsc::UnboundedSender<CompletedSubmission>,
    completions_rx: mpsc::UnboundedReceiver<CompletedSubmission>,
    owner_email: String,
    pub delivery: DeliveryInfo,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
    /// Advances while a submission is in flight
    pub spinner_tick: usize,
}

impl App {
    /// Create a new App from configuration.
    ///
    /// An unusable delivery configuration falls back to the mock sender
    /// and queues an error for the user.
    pub fn new(config: &ContactConfig) -> Self {
        let (delivery, setup_error): (Arc<dyn EmailDelivery>, _) =
            match delivery::from_config(config) {
                Ok(delivery) => (delivery, None),
                Err(err) => {
                    warn!("Delivery setup failed, using mock: {err}");
                    let mock = MockDelivery::with_delay(config.owner_profile(), config.mock_delay());
                    (
                        Arc::new(mock),
                        Some(format!(
                            "{err}\nFalling back to mock delivery; messages will not be sent."
                        )),
                    )
                }
            };

        let info = DeliveryInfo {
            name: delivery.name(),
            guarantee: delivery.guarantee(),
        };
        let mut app = Self::with_delivery(
            delivery,
            info,
            config.owner_email(),
            config.fallback_email(),
        );
        if let Some(message) = setup_error {
            app.push_error(message);
        }
        app
    }

    pub fn with_delivery(
        delivery: Arc<dyn EmailDelivery>,
        info: DeliveryInfo,
        owner_email: &str,
        fallback_email: &str,
    ) -> Self {
        let (notifier, notifications) = Notifier::channel();
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            orchestrator: SubmissionOrchestrator::new(delivery, notifier.clone(), fallback_email),
            notifier,
            notifications,
            completions_tx,
            completions_rx,
            owner_email: owner_email.to_string(),
            delivery: info,
            quit: false,
            last_ctrl_c: None,
            spinner_tick: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn owner_email(&self) -> &str {
        &self.owner_email
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Apply finished submissions, collect notifications and expire toasts
    pub fn tick(&mut self) {
        while let Ok(completed) = self.completions_rx.try_recv() {
            self.orchestrator
                .finish(&mut self.state.form, &completed.pending, completed.outcome);
        }
        while let Ok(notification) = self.notifications.try_recv() {
            self.state.toasts.push(notification);
        }
        self.state.toasts.prune();

        if self.state.form.is_submitting() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.handle_ctrl_c();
            return;
        }
        self.last_ctrl_c = None;

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        if key.code == KeyCode::Char('l')
            && (ctrl || key.modifiers.contains(crate::platform::COPY_MODIFIER))
        {
            self.copy_mailto_link();
            return;
        }

        // Input is not routed to the form while a submission is in flight
        if self.state.form.is_submitting() {
            return;
        }

        self.handle_form_key(key, ctrl);
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(previous) if now.duration_since(previous) < QUIT_WINDOW => {
                info!("Quitting");
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, ctrl: bool) {
        let form = &mut self.state.form;
        let on_buttons = form.is_buttons_row_active();
        let on_selection = form
            .active_form_field()
            .is_some_and(|field| !field.accepts_text());

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::F(n @ 1..=5) => self.apply_quick_action(QuickAction::ALL[usize::from(n) - 1]),
            KeyCode::Esc => self.state.clear_field_errors(),
            KeyCode::Enter if on_buttons => match form.selected_button {
                FormButton::Send => self.submit(),
                FormButton::Clear => self.reset(),
            },
            KeyCode::Enter => {
                if !form.insert_newline() {
                    form.next_field();
                }
            }
            KeyCode::Left if on_buttons || on_selection => form.select_prev_option(),
            KeyCode::Right | KeyCode::Char(' ') if on_buttons || on_selection => {
                form.select_next_option()
            }
            KeyCode::Up => form.prev_field(),
            KeyCode::Down => form.next_field(),
            KeyCode::Char(c) if !ctrl => {
                form.input_char(c);
                self.clear_error_on_active_field();
            }
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    fn clear_error_on_active_field(&mut self) {
        if let Some(field) = self.state.form.active_form_field() {
            self.state.field_errors.retain(|flagged| *flagged != field.field);
        }
    }

    /// Validate, lock the form and hand the request to a delivery task
    pub fn submit(&mut self) {
        match self.orchestrator.begin(&mut self.state.form) {
            Ok(pending) => {
                self.state.clear_field_errors();
                self.spinner_tick = 0;
                self.orchestrator.spawn(pending, self.completions_tx.clone());
            }
            Err(SubmitError::Invalid(errors)) => {
                debug!(%errors, "Submit rejected by validation");
                self.state.show_validation_errors(&errors);
                if let Some(first) = errors.fields().first() {
                    self.state.form.focus(*first);
                }
            }
            Err(SubmitError::InFlight) => {
                debug!("Submit ignored, a submission is already in flight");
            }
        }
    }

    fn reset(&mut self) {
        self.state.form.reset();
        self.state.clear_field_errors();
    }

    fn apply_quick_action(&mut self, action: QuickAction) {
        self.state.form.apply_quick_action(action);
        self.state.field_errors.retain(|field| {
            !matches!(
                field,
                ContactField::Subject | ContactField::Message | ContactField::ProjectType
            )
        });
    }

    /// Mailto link carrying the current draft, or a general inquiry when
    /// the draft has no subject yet
    pub fn mailto_for_draft(&self) -> String {
        let request = self.state.form.request();
        if request.subject.trim().is_empty() {
            QuickAction::Email.mailto_link(&self.owner_email)
        } else {
            mailto_link(&self.owner_email, &request.subject, &request.message)
        }
    }

    fn copy_mailto_link(&mut self) {
        let link = self.mailto_for_draft();
        let notification = match copy_to_clipboard(&link) {
            Ok(()) => Notification::info("Email link copied", "Paste it into your mail client."),
            Err(err) => {
                warn!("Clipboard unavailable: {err}");
                Notification::info("Email me directly", self.owner_email.clone())
            }
        };
        self.notifier.emit(notification);
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::{EmailResult, MockEmailDelivery};
    use crate::submission::NotificationKind;
    use pretty_assertions::assert_eq;

    const INFO: DeliveryInfo = DeliveryInfo {
        name: "mock",
        guarantee: DeliveryGuarantee::Confirmed,
    };

    fn app_with(mock: MockEmailDelivery) -> App {
        App::with_delivery(Arc::new(mock), INFO, "owner@example.com", "help@example.com")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_valid(app: &mut App) {
        let form = &mut app.state.form;
        form.set_field(ContactField::ProjectType, "creative").unwrap();
        form.set_field(ContactField::Name, "Alice").unwrap();
        form.set_field(ContactField::Email, "a@x.com").unwrap();
        form.set_field(ContactField::Subject, "Hi").unwrap();
        form.set_field(ContactField::Message, "Hello").unwrap();
    }

    async fn settle(app: &mut App) {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                app.tick();
                if !app.state.form.is_submitting() {
                    break;
                }
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = app_with(MockEmailDelivery::new());
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Alice");
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.state.form.request().name, "Alic");
    }

    #[test]
    fn test_space_cycles_choice_field() {
        let mut app = app_with(MockEmailDelivery::new());
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.state.form.request().project_type, "legal");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.form.request().project_type, "legaltech");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.form.request().project_type, "legal");
    }

    #[test]
    fn test_enter_adds_newline_only_in_message() {
        let mut app = app_with(MockEmailDelivery::new());
        app.state.form.focus(ContactField::Message);
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "b");
        assert_eq!(app.state.form.request().message, "a\nb");

        app.state.form.focus(ContactField::Subject);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.state.form.active_form_field().map(|f| f.field),
            Some(ContactField::Message)
        );
    }

    #[test]
    fn test_invalid_submit_marks_fields_and_skips_delivery() {
        let mut mock = MockEmailDelivery::new();
        mock.expect_send_contact_email().times(0);
        let mut app = app_with(mock);
        app.state.form.set_field(ContactField::Email, "a@x.com").unwrap();

        ctrl(&mut app, 's');

        assert!(!app.state.form.is_submitting());
        assert!(app.state.has_field_error(ContactField::Name));
        assert!(!app.state.has_field_error(ContactField::Email));
        assert_eq!(
            app.state.form.active_form_field().map(|f| f.field),
            Some(ContactField::ProjectType)
        );
    }

    #[test]
    fn test_typing_clears_marker_on_that_field() {
        let mut app = app_with(MockEmailDelivery::new());
        ctrl(&mut app, 's');
        app.state.form.focus(ContactField::Name);
        type_text(&mut app, "A");

        assert!(!app.state.has_field_error(ContactField::Name));
        assert!(app.state.has_field_error(ContactField::Email));
    }

    #[tokio::test]
    async fn test_successful_submit_resets_and_shows_toast() {
        let mut mock = MockEmailDelivery::new();
        mock.expect_send_contact_email()
            .times(1)
            .returning(|_| Ok(EmailResult::success("sent")));
        let mut app = app_with(mock);
        fill_valid(&mut app);

        ctrl(&mut app, 's');
        assert!(app.state.form.is_submitting());

        settle(&mut app).await;

        assert!(app.state.form.request().is_empty());
        let toast = app.state.toasts.iter().last().unwrap();
        assert_eq!(toast.notification.kind, NotificationKind::Success);
        assert_eq!(toast.notification.title, "Message sent!");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft() {
        let mut mock = MockEmailDelivery::new();
        mock.expect_send_contact_email()
            .times(1)
            .returning(|_| Ok(EmailResult::failure("down")));
        let mut app = app_with(mock);
        fill_valid(&mut app);

        ctrl(&mut app, 's');
        settle(&mut app).await;

        assert_eq!(app.state.form.request().name, "Alice");
        let toast = app.state.toasts.iter().last().unwrap();
        assert_eq!(toast.notification.kind, NotificationKind::Failure);
        assert!(toast.notification.description.contains("help@example.com"));
    }

    #[tokio::test]
    async fn test_edits_and_resubmits_ignored_while_sending() {
        let mut mock = MockEmailDelivery::new();
        mock.expect_send_contact_email()
            .times(1)
            .returning(|_| Ok(EmailResult::success("sent")));
        let mut app = app_with(mock);
        fill_valid(&mut app);
        app.state.form.focus(ContactField::Name);

        ctrl(&mut app, 's');
        type_text(&mut app, "zzz");
        ctrl(&mut app, 's');
        ctrl(&mut app, 'r');
        assert_eq!(app.state.form.request().name, "Alice");

        settle(&mut app).await;
        assert!(app.state.form.request().is_empty());
    }

    #[test]
    fn test_function_keys_apply_quick_actions() {
        let mut app = app_with(MockEmailDelivery::new());
        press(&mut app, KeyCode::F(4));

        assert_eq!(
            app.state.form.request().subject,
            "URGENT: Immediate Assistance Needed"
        );
        assert_eq!(
            app.state.form.request().priority,
            crate::contact::Priority::High
        );
    }

    #[test]
    fn test_ctrl_r_resets_form() {
        let mut app = app_with(MockEmailDelivery::new());
        fill_valid(&mut app);
        ctrl(&mut app, 'r');
        assert!(app.state.form.request().is_empty());
    }

    #[test]
    fn test_clear_button_resets_form() {
        let mut app = app_with(MockEmailDelivery::new());
        fill_valid(&mut app);
        app.state.form.set_active_field(ContactField::ALL.len());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(app.state.form.request().is_empty());
    }

    #[test]
    fn test_mailto_for_draft() {
        let mut app = app_with(MockEmailDelivery::new());
        assert!(app
            .mailto_for_draft()
            .starts_with("mailto:owner@example.com?subject=General%20Inquiry"));

        app.state.form.set_field(ContactField::Subject, "Hi there").unwrap();
        assert!(app
            .mailto_for_draft()
            .starts_with("mailto:owner@example.com?subject=Hi%20there"));
    }

    #[test]
    fn test_double_ctrl_c_quits() {
        let mut app = app_with(MockEmailDelivery::new());
        ctrl(&mut app, 'c');
        assert!(!app.should_quit());
        ctrl(&mut app, 'c');
        assert!(app.should_quit());
    }

    #[test]
    fn test_other_key_between_ctrl_c_does_not_quit() {
        let mut app = app_with(MockEmailDelivery::new());
        ctrl(&mut app, 'c');
        press(&mut app, KeyCode::Tab);
        ctrl(&mut app, 'c');
        assert!(!app.should_quit());
    }

    #[test]
    fn test_new_with_default_config_uses_mock() {
        let app = App::new(&ContactConfig::default());
        assert_eq!(app.delivery.name, "mock");
        assert_eq!(app.delivery.guarantee, DeliveryGuarantee::Simulated);
        assert!(!app.state.has_errors());
    }

    #[test]
    fn test_new_falls_back_when_delivery_is_unusable() {
        let config = ContactConfig {
            delivery: Some(crate::config::DeliveryMode::Http),
            ..Default::default()
        };
        let app = App::new(&config);

        assert_eq!(app.delivery.name, "mock");
        assert!(app
            .state
            .current_error()
            .unwrap()
            .contains("CONTACT_TUI_API_KEY"));
    }

    #[test]
    fn test_error_dialog_is_modal() {
        let mut app = app_with(MockEmailDelivery::new());
        app.push_error("boom");
        type_text(&mut app, "x");
        assert!(app.state.form.request().is_empty());

        press(&mut app, KeyCode::Esc);
        assert!(!app.state.has_errors());
    }
}
