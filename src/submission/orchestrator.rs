//! Submission orchestration around a delivery collaborator

use super::notification::{Notification, Notifier};
use crate::contact::{validate, ContactRequest, ValidationErrors};
use crate::delivery::{DeliveryError, EmailDelivery, EmailResult};
use crate::state::ContactForm;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Response-time promise shown after a successful submission
pub const RESPONSE_TIME: &str = "24–48 hours";

/// Reasons a submit action was refused before reaching delivery
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),
}

/// Snapshot of an accepted request, taken when the form was locked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    request: ContactRequest,
}

impl PendingSubmission {
    pub fn request(&self) -> &ContactRequest {
        &self.request
    }
}

/// Outcome of a delivery attempt, with every failure collapsed into one
/// variant
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Delivered(EmailResult),
    Failed(String),
}

impl From<Result<EmailResult, DeliveryError>> for DeliveryOutcome {
    fn from(result: Result<EmailResult, DeliveryError>) -> Self {
        match result {
            Ok(result) if result.success => Self::Delivered(result),
            Ok(result) => Self::Failed(result.message),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// A finished delivery, ready to be applied to the form
#[derive(Debug)]
pub struct CompletedSubmission {
    pub pending: PendingSubmission,
    pub outcome: DeliveryOutcome,
}

/// Runs one delivery attempt on its own task so a panicking collaborator
/// still produces an outcome
async fn run_delivery(
    delivery: Arc<dyn EmailDelivery>,
    request: ContactRequest,
) -> DeliveryOutcome {
    let task = tokio::spawn(async move { delivery.send_contact_email(&request).await });
    match task.await {
        Ok(result) => result.into(),
        Err(join_err) => Err(DeliveryError::Task(join_err.to_string())).into(),
    }
}

/// Sequences validate → lock → deliver → unlock → notify
pub struct SubmissionOrchestrator {
    delivery: Arc<dyn EmailDelivery>,
    notifier: Notifier,
    fallback_email: String,
}

impl SubmissionOrchestrator {
    pub fn new(
        delivery: Arc<dyn EmailDelivery>,
        notifier: Notifier,
        fallback_email: impl Into<String>,
    ) -> Self {
        Self {
            delivery,
            notifier,
            fallback_email: fallback_email.into(),
        }
    }

    /// Validate and lock the form.
    ///
    /// A refused submit leaves the form exactly as it was.
    pub fn begin(&self, form: &mut ContactForm) -> Result<PendingSubmission, SubmitError> {
        if form.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        validate(form.request())?;

        form.mark_submitting();
        Ok(PendingSubmission {
            request: form.request().clone(),
        })
    }

    /// Make exactly one delivery call for a pending submission
    pub async fn deliver(&self, pending: &PendingSubmission) -> DeliveryOutcome {
        run_delivery(Arc::clone(&self.delivery), pending.request.clone()).await
    }

    /// Deliver on a background task and report the outcome over `tx`
    pub fn spawn(
        &self,
        pending: PendingSubmission,
        tx: mpsc::UnboundedSender<CompletedSubmission>,
    ) -> JoinHandle<()> {
        let delivery = Arc::clone(&self.delivery);
        tokio::spawn(async move {
            let outcome = run_delivery(delivery, pending.request.clone()).await;
            if tx.send(CompletedSubmission { pending, outcome }).is_err() {
                warn!("Submission finished after the form was closed");
            }
        })
    }

    /// Unlock the form and emit the outcome notification.
    ///
    /// Success resets the form; failure keeps the draft for a manual retry.
    pub fn finish(
        &self,
        form: &mut ContactForm,
        pending: &PendingSubmission,
        outcome: DeliveryOutcome,
    ) -> Notification {
        let notification = match outcome {
            DeliveryOutcome::Delivered(result) => {
                info!(message = %result.message, "Contact request delivered");
                form.reset();
                Notification::success(
                    "Message sent!",
                    format!(
                        "Thank you, {}! I'll get back to you within {RESPONSE_TIME}.",
                        pending.request.name.trim()
                    ),
                )
            }
            DeliveryOutcome::Failed(reason) => {
                warn!(%reason, "Contact request delivery failed");
                Notification::failure(
                    "Failed to send message",
                    format!(
                        "Please try again or email me directly at {}.",
                        self.fallback_email
                    ),
                )
            }
        };

        form.mark_idle();
        self.notifier.emit(notification.clone());
        notification
    }

    /// The whole workflow in one call
    pub async fn submit(&self, form: &mut ContactForm) -> Result<Notification, SubmitError> {
        let pending = self.begin(form)?;
        let outcome = self.deliver(&pending).await;
        Ok(self.finish(form, &pending, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactField, Priority};
    use crate::delivery::MockEmailDelivery;
    use crate::submission::NotificationKind;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn scenario_request() -> ContactRequest {
        ContactRequest {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
            project_type: "legal".to_string(),
            priority: Priority::Medium,
            ..Default::default()
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        let request = scenario_request();
        for field in ContactField::ALL {
            form.set_field(field, request.value(field)).unwrap();
        }
        form
    }

    fn orchestrator(
        delivery: MockEmailDelivery,
    ) -> (SubmissionOrchestrator, UnboundedReceiver<Notification>) {
        let (notifier, rx) = Notifier::channel();
        (
            SubmissionOrchestrator::new(Arc::new(delivery), notifier, "fallback@example.com"),
            rx,
        )
    }

    fn succeeding(times: usize) -> MockEmailDelivery {
        let mut mock = MockEmailDelivery::new();
        mock.expect_send_contact_email()
            .times(times)
            .returning(|_| Ok(EmailResult::success("Emails sent successfully")));
        mock
    }

    #[tokio::test]
    async fn test_scenario_a_success_resets_form() {
        let (orchestrator, mut rx) = orchestrator(succeeding(1));
        let mut form = filled_form();

        let notification = orchestrator.submit(&mut form).await.unwrap();

        assert!(!form.is_submitting());
        assert!(form.request().is_empty());
        assert_eq!(notification.kind, NotificationKind::Success);
        assert!(notification.description.contains("Alice"));
        assert!(notification.description.contains("24–48 hours"));
        assert_eq!(rx.try_recv().unwrap(), notification);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_scenario_b_rejection_keeps_draft() {
        let mut mock = MockEmailDelivery::new();
        mock.expect_send_contact_email()
            .times(1)
            .returning(|_| Err(DeliveryError::Status {
                status: 503,
                body: "unavailable".to_string(),
            }));
        let (orchestrator, mut rx) = orchestrator(mock);
        let mut form = filled_form();

        let notification = orchestrator.submit(&mut form).await.unwrap();

        assert!(!form.is_submitting());
        assert_eq!(form.request(), &scenario_request());
        assert_eq!(notification.kind, NotificationKind::Failure);
        assert!(notification.description.contains("fallback@example.com"));
        assert_eq!(rx.try_recv().unwrap().kind, NotificationKind::Failure);
    }

    #[tokio::test]
    async fn test_unsuccessful_result_is_treated_like_rejection() {
        let mut mock = MockEmailDelivery::new();
        mock.expect_send_contact_email()
            .times(1)
            .returning(|_| Ok(EmailResult::failure("Failed to send confirmation email")));
        let (orchestrator, _rx) = orchestrator(mock);
        let mut form = filled_form();

        let notification = orchestrator.submit(&mut form).await.unwrap();

        assert_eq!(notification.kind, NotificationKind::Failure);
        assert_eq!(form.request(), &scenario_request());
    }

    struct PanickingDelivery;

    #[async_trait::async_trait]
    impl EmailDelivery for PanickingDelivery {
        async fn send_contact_email(
            &self,
            _request: &ContactRequest,
        ) -> Result<EmailResult, DeliveryError> {
            panic!("transport exploded")
        }

        fn name(&self) -> &'static str {
            "panicking"
        }
    }

    #[tokio::test]
    async fn test_panicking_delivery_becomes_failure() {
        let (notifier, _rx) = Notifier::channel();
        let orchestrator =
            SubmissionOrchestrator::new(Arc::new(PanickingDelivery), notifier, "fallback@example.com");
        let mut form = filled_form();

        let notification = orchestrator.submit(&mut form).await.unwrap();

        assert_eq!(notification.kind, NotificationKind::Failure);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_scenario_c_invalid_request_never_reaches_delivery() {
        let (orchestrator, mut rx) = orchestrator(succeeding(0));
        let mut form = filled_form();
        form.set_field(ContactField::Name, "").unwrap();

        let err = orchestrator.submit(&mut form).await.unwrap_err();

        match err {
            SubmitError::Invalid(errors) => assert_eq!(errors.fields(), vec![ContactField::Name]),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!form.is_submitting());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_every_missing_required_field_blocks_delivery() {
        let (orchestrator, _rx) = orchestrator(succeeding(0));

        for field in ContactField::ALL.into_iter().filter(ContactField::is_required) {
            let mut form = filled_form();
            form.set_field(field, "").unwrap();
            assert!(matches!(
                orchestrator.begin(&mut form),
                Err(SubmitError::Invalid(_))
            ));
            assert!(!form.is_submitting());
        }
    }

    #[tokio::test]
    async fn test_scenario_d_second_submit_while_pending_is_refused() {
        let (orchestrator, _rx) = orchestrator(succeeding(1));
        let mut form = filled_form();

        let pending = orchestrator.begin(&mut form).unwrap();
        assert!(form.is_submitting());
        assert!(matches!(
            orchestrator.begin(&mut form),
            Err(SubmitError::InFlight)
        ));

        let outcome = orchestrator.deliver(&pending).await;
        orchestrator.finish(&mut form, &pending, outcome);

        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_spawned_delivery_reports_completion() {
        let (orchestrator, mut notifications) = orchestrator(succeeding(1));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut form = filled_form();

        let pending = orchestrator.begin(&mut form).unwrap();
        orchestrator.spawn(pending, tx).await.unwrap();

        let completed = rx.recv().await.unwrap();
        assert_eq!(completed.pending.request(), &scenario_request());
        assert!(matches!(completed.outcome, DeliveryOutcome::Delivered(_)));
        assert!(form.is_submitting());

        orchestrator.finish(&mut form, &completed.pending, completed.outcome);
        assert!(!form.is_submitting());
        assert!(form.request().is_empty());
        assert_eq!(
            notifications.try_recv().unwrap().kind,
            NotificationKind::Success
        );
    }

    #[tokio::test]
    async fn test_retry_after_failure_uses_retained_draft() {
        let mut mock = MockEmailDelivery::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_send_contact_email()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(EmailResult::failure("down")));
        mock.expect_send_contact_email()
            .withf(|request| request.name == "Alice")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(EmailResult::success("ok")));
        let (orchestrator, _rx) = orchestrator(mock);
        let mut form = filled_form();

        let first = orchestrator.submit(&mut form).await.unwrap();
        assert_eq!(first.kind, NotificationKind::Failure);

        let second = orchestrator.submit(&mut form).await.unwrap();
        assert_eq!(second.kind, NotificationKind::Success);
        assert!(form.request().is_empty());
    }

    #[test]
    fn test_outcome_from_result() {
        let delivered: DeliveryOutcome = Ok(EmailResult::success("ok")).into();
        assert!(matches!(delivered, DeliveryOutcome::Delivered(_)));

        let failed: DeliveryOutcome = Ok(EmailResult::failure("nope")).into();
        assert_eq!(failed, DeliveryOutcome::Failed("nope".to_string()));

        let errored: DeliveryOutcome = Err(DeliveryError::NotConfigured("X")).into();
        assert_eq!(
            errored,
            DeliveryOutcome::Failed("delivery is not configured: set X".to_string())
        );
    }
}
