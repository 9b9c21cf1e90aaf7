//! Generic webhook delivery (Zapier, Make and friends)

use super::result::{DeliveryError, DeliveryGuarantee, EmailResult};
use super::traits::EmailDelivery;
use crate::contact::ContactRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Value of the `source` field in every webhook payload
pub const WEBHOOK_SOURCE: &str = "portfolio_website";

/// Flattened request plus client context, as posted to the webhook
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload<'a> {
    #[serde(flatten)]
    pub request: &'a ContactRequest,
    pub timestamp: DateTime<Utc>,
    pub source: &'static str,
    pub user_agent: &'a str,
    pub referrer: &'a str,
}

/// Fire-and-forget delivery.
///
/// Success means the payload was dispatched and some response came back.
/// The response status is deliberately not inspected, so this mode is
/// at-most-once and best-effort.
pub struct WebhookDelivery {
    client: reqwest::Client,
    url: String,
    user_agent: String,
    referrer: String,
}

impl WebhookDelivery {
    pub fn new(
        client: reqwest::Client,
        url: impl Into<String>,
        user_agent: impl Into<String>,
        referrer: impl Into<String>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            user_agent: user_agent.into(),
            referrer: referrer.into(),
        }
    }

    pub fn payload<'a>(&'a self, request: &'a ContactRequest) -> WebhookPayload<'a> {
        WebhookPayload {
            request,
            timestamp: Utc::now(),
            source: WEBHOOK_SOURCE,
            user_agent: &self.user_agent,
            referrer: &self.referrer,
        }
    }
}

#[async_trait]
impl EmailDelivery for WebhookDelivery {
    async fn send_contact_email(
        &self,
        request: &ContactRequest,
    ) -> Result<EmailResult, DeliveryError> {
        let payload = self.payload(request);
        let data = serde_json::to_value(&payload)?;

        let response = self.client.post(&self.url).json(&data).send().await?;
        debug!(status = response.status().as_u16(), "Webhook dispatched");

        Ok(EmailResult::success("Webhook triggered successfully").with_data(data))
    }

    fn name(&self) -> &'static str {
        "webhook"
    }

    fn guarantee(&self) -> DeliveryGuarantee {
        DeliveryGuarantee::BestEffort
    }
}
