//! Logging-only delivery for development

use super::result::{DeliveryError, DeliveryGuarantee, EmailResult};
use super::templates::{admin_notification, confirmation, OwnerProfile};
use super::traits::EmailDelivery;
use crate::contact::ContactRequest;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// Simulated network latency
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1500);

/// Renders both emails, logs them and reports success after a fixed delay
pub struct MockDelivery {
    owner: OwnerProfile,
    delay: Duration,
}

impl MockDelivery {
    pub fn new(owner: OwnerProfile) -> Self {
        Self::with_delay(owner, DEFAULT_MOCK_DELAY)
    }

    pub fn with_delay(owner: OwnerProfile, delay: Duration) -> Self {
        Self { owner, delay }
    }
}

#[async_trait]
impl EmailDelivery for MockDelivery {
    async fn send_contact_email(
        &self,
        request: &ContactRequest,
    ) -> Result<EmailResult, DeliveryError> {
        info!(delay_ms = self.delay.as_millis() as u64, "Mock email service sending contact email");
        tokio::time::sleep(self.delay).await;

        let admin_email = admin_notification(request, &self.owner, Utc::now())?;
        let user_email = confirmation(request, &self.owner)?;

        debug!(to = %admin_email.to, subject = %admin_email.subject, body = %admin_email.text, "Email to owner");
        debug!(to = %user_email.to, subject = %user_email.subject, body = %user_email.text, "Confirmation to submitter");
        info!(
            owner = %admin_email.to,
            submitter = %user_email.to,
            "Emails would be sent"
        );

        Ok(EmailResult::success("Emails sent successfully").with_data(json!({
            "messageId": Uuid::new_v4().to_string(),
            "adminEmail": admin_email,
            "userEmail": user_email,
        })))
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn guarantee(&self) -> DeliveryGuarantee {
        DeliveryGuarantee::Simulated
    }
}
