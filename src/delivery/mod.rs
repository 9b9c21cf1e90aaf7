//! Email delivery collaborators
//!
//! A contact request leaves the app through an [`EmailDelivery`]
//! implementation chosen from configuration.

mod http;
mod mock;
mod result;
pub mod templates;
mod traits;
mod webhook;

pub use http::{HttpEmailDelivery, DEFAULT_API_URL};
pub use mock::{MockDelivery, DEFAULT_MOCK_DELAY};
pub use result::{DeliveryError, DeliveryGuarantee, EmailResult};
pub use traits::EmailDelivery;
pub use webhook::{WebhookDelivery, WebhookPayload, WEBHOOK_SOURCE};

#[cfg(test)]
pub use traits::MockEmailDelivery;

use crate::config::{ContactConfig, DeliveryMode};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent with outgoing requests and embedded in webhook payloads
pub fn user_agent() -> String {
    format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

fn http_client(timeout: Duration) -> Result<reqwest::Client, DeliveryError> {
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(timeout)
        .user_agent(user_agent())
        .build()?;
    Ok(client)
}

/// Build the delivery collaborator selected by the configuration
pub fn from_config(config: &ContactConfig) -> Result<Arc<dyn EmailDelivery>, DeliveryError> {
    let owner = config.owner_profile();

    let delivery: Arc<dyn EmailDelivery> = match config.delivery_mode() {
        DeliveryMode::Mock => Arc::new(MockDelivery::with_delay(owner, config.mock_delay())),
        DeliveryMode::Http => {
            let api_key = config
                .email_api_key
                .clone()
                .filter(|key| !key.is_empty())
                .ok_or(DeliveryError::NotConfigured("CONTACT_TUI_API_KEY"))?;
            Arc::new(HttpEmailDelivery::new(
                http_client(config.request_timeout())?,
                config.email_api_url(),
                api_key,
                owner,
                config.noreply_sender(),
            ))
        }
        DeliveryMode::Webhook => {
            let url = config
                .webhook_url
                .clone()
                .filter(|url| !url.is_empty())
                .ok_or(DeliveryError::NotConfigured("CONTACT_TUI_WEBHOOK_URL"))?;
            Arc::new(WebhookDelivery::new(
                http_client(config.request_timeout())?,
                url,
                user_agent(),
                config.referrer(),
            ))
        }
    };

    info!(
        delivery = delivery.name(),
        guarantee = delivery.guarantee().label(),
        "Email delivery configured"
    );
    Ok(delivery)
}
