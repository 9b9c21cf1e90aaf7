//! Trait abstraction for email delivery to enable mocking in tests

use super::result::{DeliveryError, DeliveryGuarantee, EmailResult};
use crate::contact::ContactRequest;
use async_trait::async_trait;

/// Anything that can carry a contact request to the site owner.
///
/// Implementations must not panic on expected failures: a failed attempt
/// is reported either as `Err` or as a result with `success == false`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    /// Deliver the request and report the outcome
    async fn send_contact_email(&self, request: &ContactRequest)
        -> Result<EmailResult, DeliveryError>;

    /// Short name for logs and the status bar
    fn name(&self) -> &'static str;

    /// Strength of the success signal this implementation can give
    fn guarantee(&self) -> DeliveryGuarantee {
        DeliveryGuarantee::Confirmed
    }
}
