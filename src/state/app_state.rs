//! Application state definitions

use super::forms::ContactForm;
use super::toasts::Toasts;
use crate::contact::{ContactField, ValidationErrors};
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: ContactForm,
    pub toasts: Toasts,

    /// Modal error messages, oldest first
    pub error_queue: VecDeque<String>,
    /// Fields flagged by the last rejected submit
    pub field_errors: Vec<ContactField>,
    /// One-line status shown above the hints
    pub status_message: Option<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn show_validation_errors(&mut self, errors: &ValidationErrors) {
        self.field_errors = errors.fields();
        self.status_message = Some(errors.to_string().replace('\n', " · "));
    }

    pub fn clear_field_errors(&mut self) {
        self.field_errors.clear();
        self.status_message = None;
    }

    pub fn has_field_error(&self, field: ContactField) -> bool {
        self.field_errors.contains(&field)
    }
}
