//! Form field descriptors

use crate::contact::{
    find_option, ContactField, ContactRequest, OptionEntry, BUDGET_RANGES, PRIORITIES,
    PROJECT_TYPES, TIMELINES,
};

/// How a field is edited in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Choice(&'static [OptionEntry]),
    Priority,
}

/// A single form field with its editing behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub field: ContactField,
    pub kind: FieldKind,
}

impl FormField {
    pub fn for_field(field: ContactField) -> Self {
        let kind = match field {
            ContactField::Message => FieldKind::Multiline,
            ContactField::ProjectType => FieldKind::Choice(PROJECT_TYPES),
            ContactField::Budget => FieldKind::Choice(BUDGET_RANGES),
            ContactField::Timeline => FieldKind::Choice(TIMELINES),
            ContactField::Priority => FieldKind::Priority,
            _ => FieldKind::Text,
        };
        Self { field, kind }
    }

    /// Label with a required marker
    pub fn label(&self) -> String {
        if self.field.is_required() {
            format!("{} *", self.field.label())
        } else {
            self.field.label().to_string()
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    /// True for fields that accept typed characters
    pub fn accepts_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text | FieldKind::Multiline)
    }

    /// Value as shown in the form
    pub fn display_value(&self, request: &ContactRequest) -> String {
        let raw = request.value(self.field);
        match self.kind {
            FieldKind::Text | FieldKind::Multiline => raw.to_string(),
            FieldKind::Choice(table) => match find_option(table, raw) {
                Some(entry) => entry.label.to_string(),
                None if raw.is_empty() => "Not set".to_string(),
                None => raw.to_string(),
            },
            FieldKind::Priority => request.priority.label().to_string(),
        }
    }

    /// Hint line for the focused field
    pub fn description(&self, request: &ContactRequest) -> Option<&'static str> {
        match self.kind {
            FieldKind::Choice(table) => {
                find_option(table, request.value(self.field)).map(|entry| entry.description)
            }
            FieldKind::Priority => {
                find_option(PRIORITIES, request.priority.as_str()).map(|entry| entry.description)
            }
            _ => None,
        }
    }
}

/// Every field in form order
pub fn form_fields() -> impl Iterator<Item = FormField> {
    ContactField::ALL.into_iter().map(FormField::for_field)
}
