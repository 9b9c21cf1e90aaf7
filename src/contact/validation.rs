//! Client-side validation of contact requests

use super::options::{find_option, OptionEntry, BUDGET_RANGES, PROJECT_TYPES, TIMELINES};
use super::request::{ContactField, ContactRequest};
use std::fmt;
use validator::{Validate, ValidationError};

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationReason {
    Required,
    UnknownOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: ContactField,
    pub reason: ViolationReason,
}

/// Non-empty set of field-level violations, in form order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn fields(&self) -> Vec<ContactField> {
        self.0.iter().map(|v| v.field).collect()
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    fn labels_for(&self, reason: ViolationReason) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|v| v.reason == reason)
            .map(|v| v.field.label())
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = self.labels_for(ViolationReason::Required);
        let unknown = self.labels_for(ViolationReason::UnknownOption);

        let mut parts = Vec::new();
        if !missing.is_empty() {
            parts.push(format!("Please fill in: {}", missing.join(", ")));
        }
        if !unknown.is_empty() {
            parts.push(format!("Please pick a listed option for: {}", unknown.join(", ")));
        }
        f.write_str(&parts.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

const REQUIRED: &str = "required";
const UNKNOWN_OPTION: &str = "unknown_option";

/// Check a request before it may be submitted.
///
/// Required fields must contain non-whitespace text. Option fields, when
/// set, must hold an id from their table. The email address is only
/// required to be present; its format is not checked.
pub fn validate(request: &ContactRequest) -> Result<(), ValidationErrors> {
    let Err(errors) = Validate::validate(request) else {
        return Ok(());
    };

    let by_field = errors.field_errors();
    let violations: Vec<FieldViolation> = ContactField::ALL
        .into_iter()
        .filter_map(|field| {
            let reasons = by_field.get(attribute_name(field))?;
            let reason = if reasons.iter().any(|e| e.code == UNKNOWN_OPTION) {
                ViolationReason::UnknownOption
            } else {
                ViolationReason::Required
            };
            Some(FieldViolation { field, reason })
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(violations))
    }
}

/// Struct attribute name, as keyed by the derived validator
fn attribute_name(field: ContactField) -> &'static str {
    match field {
        ContactField::ProjectType => "project_type",
        other => other.key(),
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(REQUIRED))
    } else {
        Ok(())
    }
}

/// Unset, or exactly one of the table's ids
fn listed(table: &'static [OptionEntry], value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || find_option(table, value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new(UNKNOWN_OPTION))
    }
}

pub(crate) fn project_type_id(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    listed(PROJECT_TYPES, value)
}

pub(crate) fn budget_id(value: &str) -> Result<(), ValidationError> {
    listed(BUDGET_RANGES, value)
}

pub(crate) fn timeline_id(value: &str) -> Result<(), ValidationError> {
    listed(TIMELINES, value)
}
