//! Configuration handling for the contact form

use crate::delivery::templates::OwnerProfile;
use crate::delivery::{DEFAULT_API_URL, DEFAULT_MOCK_DELAY};
use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_OWNER_NAME: &str = "Portfolio Owner";
const DEFAULT_OWNER_EMAIL: &str = "owner@example.com";
const DEFAULT_NOREPLY_SENDER: &str = "noreply@example.com";
const DEFAULT_REFERRER: &str = "https://example.com/#contact";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Which delivery collaborator handles submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    #[default]
    Mock,
    Http,
    Webhook,
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mock => "mock",
            Self::Http => "http",
            Self::Webhook => "webhook",
        })
    }
}

impl FromStr for DeliveryMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "http" => Ok(Self::Http),
            "webhook" => Ok(Self::Webhook),
            other => Err(anyhow!(
                "unknown delivery mode `{other}`, expected mock, http or webhook"
            )),
        }
    }
}

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Delivery collaborator
    pub delivery: Option<DeliveryMode>,
    /// Name used in the confirmation email
    pub owner_name: Option<String>,
    /// Address receiving contact requests
    pub owner_email: Option<String>,
    /// Address shown when delivery fails (defaults to the owner address)
    pub fallback_email: Option<String>,
    /// Sender of the owner notification
    pub noreply_sender: Option<String>,
    /// Base URL of the email API
    pub email_api_url: Option<String>,
    /// API key for the email API, only ever read from the environment
    #[serde(skip)]
    pub email_api_key: Option<String>,
    /// Webhook endpoint
    pub webhook_url: Option<String>,
    /// Page reported as referrer in webhook payloads
    pub referrer: Option<String>,
    /// Simulated latency of the mock delivery
    pub mock_delay_ms: Option<u64>,
    /// Overall HTTP request timeout
    pub request_timeout_secs: Option<u64>,
}

impl ContactConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "contact-tui", "contact-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("contact-tui.log"))
    }

    /// Load configuration from file, then apply environment overrides.
    ///
    /// Never fails: whatever could be read is kept and the problems met on
    /// the way are returned alongside.
    pub fn load() -> (Self, Vec<anyhow::Error>) {
        Self::assemble(Self::load_file(), |key| std::env::var(key).ok())
    }

    fn assemble(
        file: Result<Self>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<anyhow::Error>) {
        let mut problems = Vec::new();
        let mut config = file.unwrap_or_else(|err| {
            problems.push(err);
            Self::default()
        });
        if let Err(err) = config.apply_env(lookup) {
            problems.push(err);
        }
        (config, problems)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ContactConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Override fields from `CONTACT_TUI_*` variables
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(key) = lookup("CONTACT_TUI_API_KEY") {
            self.email_api_key = Some(key);
        }
        if let Some(url) = lookup("CONTACT_TUI_API_URL") {
            self.email_api_url = Some(url);
        }
        if let Some(url) = lookup("CONTACT_TUI_WEBHOOK_URL") {
            self.webhook_url = Some(url);
        }
        // Parsed last so a bad mode does not discard the other overrides
        if let Some(mode) = lookup("CONTACT_TUI_DELIVERY") {
            self.delivery = Some(mode.parse()?);
        }
        Ok(())
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        self.delivery.unwrap_or_default()
    }

    pub fn owner_name(&self) -> &str {
        self.owner_name.as_deref().unwrap_or(DEFAULT_OWNER_NAME)
    }

    pub fn owner_email(&self) -> &str {
        self.owner_email.as_deref().unwrap_or(DEFAULT_OWNER_EMAIL)
    }

    pub fn fallback_email(&self) -> &str {
        self.fallback_email
            .as_deref()
            .unwrap_or_else(|| self.owner_email())
    }

    pub fn noreply_sender(&self) -> &str {
        self.noreply_sender
            .as_deref()
            .unwrap_or(DEFAULT_NOREPLY_SENDER)
    }

    pub fn email_api_url(&self) -> &str {
        self.email_api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn referrer(&self) -> &str {
        self.referrer.as_deref().unwrap_or(DEFAULT_REFERRER)
    }

    pub fn mock_delay(&self) -> Duration {
        self.mock_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_MOCK_DELAY)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn owner_profile(&self) -> OwnerProfile {
        OwnerProfile {
            name: self.owner_name().to_string(),
            email: self.owner_email().to_string(),
        }
    }
}
