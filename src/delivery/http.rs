//! Delivery through a transactional email HTTP API

use super::result::{DeliveryError, EmailResult};
use super::templates::{admin_notification, confirmation, EmailMessage, OwnerProfile};
use super::traits::EmailDelivery;
use crate::contact::ContactRequest;
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

/// Default endpoint of the email API
pub const DEFAULT_API_URL: &str = "https://api.your-email-service.com";

#[derive(Serialize)]
struct SendEmailBody<'a> {
    #[serde(flatten)]
    message: &'a EmailMessage,
    from: &'a str,
}

/// Sends the owner notification and the submitter confirmation as two
/// authenticated `POST {base_url}/send` calls.
///
/// The attempt only counts as a success when both calls return a 2xx
/// status; a partial success is reported as a failure naming the leg
/// that did not go through.
pub struct HttpEmailDelivery {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    owner: OwnerProfile,
    noreply_sender: String,
}

impl HttpEmailDelivery {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        owner: OwnerProfile,
        noreply_sender: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            owner,
            noreply_sender: noreply_sender.into(),
        }
    }

    fn send_url(&self) -> String {
        format!("{}/send", self.base_url.trim_end_matches('/'))
    }

    async fn post(
        &self,
        message: &EmailMessage,
        from: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(self.send_url())
            .bearer_auth(&self.api_key)
            .json(&SendEmailBody { message, from })
            .send()
            .await
    }
}

/// Extract the provider's message id from a JSON response body
async fn response_id(response: reqwest::Response) -> Option<String> {
    let body: serde_json::Value = response.json().await.ok()?;
    body.get("id")?.as_str().map(str::to_owned)
}

#[async_trait]
impl EmailDelivery for HttpEmailDelivery {
    async fn send_contact_email(
        &self,
        request: &ContactRequest,
    ) -> Result<EmailResult, DeliveryError> {
        let admin_email = admin_notification(request, &self.owner, Utc::now())?;
        let user_email = confirmation(request, &self.owner)?;

        let admin_response = self.post(&admin_email, &self.noreply_sender).await?;
        let user_response = self.post(&user_email, &self.owner.email).await?;

        let admin_status = admin_response.status();
        let user_status = user_response.status();

        let failed_leg = match (admin_status.is_success(), user_status.is_success()) {
            (true, true) => None,
            (false, true) => Some("owner notification"),
            (true, false) => Some("confirmation"),
            (false, false) => Some("owner notification and confirmation"),
        };

        if let Some(leg) = failed_leg {
            warn!(
                admin_status = admin_status.as_u16(),
                user_status = user_status.as_u16(),
                "Email API rejected {leg}"
            );
            return Ok(EmailResult::failure(format!("Failed to send {leg} email")));
        }

        let admin_id = response_id(admin_response).await;
        let user_id = response_id(user_response).await;
        info!(?admin_id, ?user_id, "Contact emails accepted by email API");

        Ok(EmailResult::success("Emails sent successfully").with_data(json!({
            "adminEmailId": admin_id,
            "userEmailId": user_id,
        })))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
