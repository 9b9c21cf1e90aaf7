//! The contact request entity

use super::options::{label_for, PROJECT_TYPES};
use super::validation::{budget_id, not_blank, project_type_id, timeline_id};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

/// Errors raised when writing a field by name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("invalid priority `{0}`, expected low, medium or high")]
    InvalidPriority(String),
}

/// Urgency the visitor attaches to the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }

    /// How quickly the owner should answer a request of this priority
    pub fn response_window(&self) -> &'static str {
        match self {
            Self::High => "2-4 hours",
            Self::Low | Self::Medium => "24-48 hours",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(FormError::InvalidPriority(s.to_string())),
        }
    }
}

/// Every attribute of a contact request, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    ProjectType,
    Name,
    Email,
    Company,
    Phone,
    Subject,
    Message,
    Budget,
    Timeline,
    Priority,
}

impl ContactField {
    pub const ALL: [ContactField; 10] = [
        ContactField::ProjectType,
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
        ContactField::Budget,
        ContactField::Timeline,
        ContactField::Priority,
    ];

    /// Wire name of the field (camelCase, as serialized)
    pub fn key(&self) -> &'static str {
        match self {
            Self::ProjectType => "projectType",
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Priority => "priority",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProjectType => "Project Type",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Phone => "Phone",
            Self::Subject => "Subject",
            Self::Message => "Message",
            Self::Budget => "Budget",
            Self::Timeline => "Timeline",
            Self::Priority => "Priority",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::Email | Self::Subject | Self::Message | Self::ProjectType
        )
    }
}

impl FromStr for ContactField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// A visitor's message to the site owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    pub company: String,
    pub phone: String,
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
    #[validate(custom(function = "project_type_id"))]
    pub project_type: String,
    #[validate(custom(function = "budget_id"))]
    pub budget: String,
    #[validate(custom(function = "timeline_id"))]
    pub timeline: String,
    pub priority: Priority,
}

impl ContactRequest {
    /// Current value of a field as text
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Priority => self.priority.as_str(),
            _ => self.text(field).map(String::as_str).unwrap_or_default(),
        }
    }

    /// Write a single field, leaving every other field untouched
    pub fn set(&mut self, field: ContactField, value: &str) -> Result<(), FormError> {
        match field {
            ContactField::Priority => {
                self.priority = value.parse()?;
            }
            _ => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = value.to_string();
                }
            }
        }
        Ok(())
    }

    /// Mutable access to a text-backed field (`None` for priority)
    pub fn text_mut(&mut self, field: ContactField) -> Option<&mut String> {
        match field {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Company => Some(&mut self.company),
            ContactField::Phone => Some(&mut self.phone),
            ContactField::Subject => Some(&mut self.subject),
            ContactField::Message => Some(&mut self.message),
            ContactField::ProjectType => Some(&mut self.project_type),
            ContactField::Budget => Some(&mut self.budget),
            ContactField::Timeline => Some(&mut self.timeline),
            ContactField::Priority => None,
        }
    }

    fn text(&self, field: ContactField) -> Option<&String> {
        match field {
            ContactField::Name => Some(&self.name),
            ContactField::Email => Some(&self.email),
            ContactField::Company => Some(&self.company),
            ContactField::Phone => Some(&self.phone),
            ContactField::Subject => Some(&self.subject),
            ContactField::Message => Some(&self.message),
            ContactField::ProjectType => Some(&self.project_type),
            ContactField::Budget => Some(&self.budget),
            ContactField::Timeline => Some(&self.timeline),
            ContactField::Priority => None,
        }
    }

    pub fn project_type_label(&self) -> Option<&'static str> {
        label_for(PROJECT_TYPES, &self.project_type)
    }

    /// True when every field holds its empty/default value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
