//! Delivery outcome and error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome reported by a delivery collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl EmailResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Ways a delivery attempt can be rejected
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("email service responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not encode payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not render email: {0}")]
    Render(#[from] askama::Error),
    #[error("delivery is not configured: set {0}")]
    NotConfigured(&'static str),
    #[error("delivery task aborted: {0}")]
    Task(String),
}

/// What a successful result actually tells the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryGuarantee {
    /// The remote side acknowledged the message
    Confirmed,
    /// The request was dispatched; the remote outcome is not observed
    BestEffort,
    /// Nothing leaves the machine
    Simulated,
}

impl DeliveryGuarantee {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::BestEffort => "best-effort",
            Self::Simulated => "simulated",
        }
    }
}
