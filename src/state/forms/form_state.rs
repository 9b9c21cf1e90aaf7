//! Contact form state

use super::field::{FieldKind, FormField};
use crate::contact::{cycle_option, ContactField, ContactRequest, FormError, QuickAction};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<FormField>;
}

/// Buttons on the last row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Send,
    Clear,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Send => "Send Message",
            Self::Clear => "Clear",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Send => Self::Clear,
            Self::Clear => Self::Send,
        }
    }
}

/// Index of the buttons row, after every field
const BUTTONS_ROW: usize = ContactField::ALL.len();

/// The contact request being composed plus the in-flight flag
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    request: ContactRequest,
    submitting: bool,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &ContactRequest {
        &self.request
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Update exactly one field
    pub fn set_field(&mut self, field: ContactField, value: &str) -> Result<(), FormError> {
        self.request.set(field, value)
    }

    /// Update a field by its camelCase name
    pub fn set_field_by_name(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field: ContactField = name.parse()?;
        self.set_field(field, value)
    }

    /// Clear every field and return focus to the top
    pub fn reset(&mut self) {
        self.request = ContactRequest::default();
        self.active_field_index = 0;
        self.selected_button = FormButton::default();
    }

    pub(crate) fn mark_submitting(&mut self) {
        self.submitting = true;
    }

    pub(crate) fn mark_idle(&mut self) {
        self.submitting = false;
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Field under focus, `None` on the buttons row
    pub fn active_form_field(&self) -> Option<FormField> {
        self.get_field(self.active_field_index)
    }

    /// Focus a specific field
    pub fn focus(&mut self, field: ContactField) {
        if let Some(index) = ContactField::ALL.iter().position(|f| *f == field) {
            self.active_field_index = index;
        }
    }

    pub fn input_char(&mut self, c: char) {
        if self.submitting {
            return;
        }
        if let Some(slot) = self.active_text_mut() {
            slot.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        if let Some(slot) = self.active_text_mut() {
            slot.pop();
        }
    }

    /// Newline in the message field; returns false elsewhere
    pub fn insert_newline(&mut self) -> bool {
        match self.active_form_field() {
            Some(field) if field.is_multiline() && !self.submitting => {
                self.request.message.push('\n');
                true
            }
            _ => false,
        }
    }

    pub fn select_next_option(&mut self) {
        self.step_option(true);
    }

    pub fn select_prev_option(&mut self) {
        self.step_option(false);
    }

    fn step_option(&mut self, forward: bool) {
        if self.submitting {
            return;
        }
        let Some(field) = self.active_form_field() else {
            self.selected_button = self.selected_button.toggle();
            return;
        };
        match field.kind {
            FieldKind::Choice(table) => {
                let next = cycle_option(table, self.request.value(field.field), forward);
                if let Some(slot) = self.request.text_mut(field.field) {
                    *slot = next.to_string();
                }
            }
            FieldKind::Priority => {
                self.request.priority = if forward {
                    self.request.priority.next()
                } else {
                    self.request.priority.prev()
                };
            }
            FieldKind::Text | FieldKind::Multiline => {}
        }
    }

    /// Prefill subject, message and implied selections from a template
    pub fn apply_quick_action(&mut self, action: QuickAction) {
        if self.submitting {
            return;
        }
        self.request.subject = action.subject().to_string();
        self.request.message = action.message().to_string();
        if let Some(project_type) = action.project_type() {
            self.request.project_type = project_type.to_string();
        }
        if let Some(priority) = action.priority() {
            self.request.priority = priority;
        }
        self.focus(ContactField::Message);
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        let field = self.active_form_field().filter(FormField::accepts_text)?;
        self.request.text_mut(field.field)
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        BUTTONS_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_field(&self, index: usize) -> Option<FormField> {
        ContactField::ALL.get(index).copied().map(FormField::for_field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Priority;
    use pretty_assertions::assert_eq;

    fn focused_on(field: ContactField) -> ContactForm {
        let mut form = ContactForm::new();
        form.focus(field);
        form
    }

    #[test]
    fn test_new_form_is_empty_and_idle() {
        let form = ContactForm::new();
        assert!(form.request().is_empty());
        assert!(!form.is_submitting());
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_set_field_by_name_changes_only_that_field() {
        let mut form = ContactForm::new();
        form.set_field_by_name("name", "Alice").unwrap();

        let expected = ContactRequest {
            name: "Alice".to_string(),
            ..Default::default()
        };
        assert_eq!(form.request(), &expected);
    }

    #[test]
    fn test_set_field_by_unknown_name() {
        let mut form = ContactForm::new();
        let err = form.set_field_by_name("nickname", "Al").unwrap_err();
        assert_eq!(err, FormError::UnknownField("nickname".to_string()));
        assert!(form.request().is_empty());
    }

    #[test]
    fn test_option_fields_store_raw_ids() {
        let mut form = ContactForm::new();
        form.set_field_by_name("budget", "a-million").unwrap();
        assert_eq!(form.request().budget, "a-million");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Subject, "Hi").unwrap();
        form.set_field(ContactField::Priority, "high").unwrap();
        form.next_field();

        form.reset();
        let once = form.request().clone();
        form.reset();

        assert_eq!(form.request(), &once);
        assert_eq!(form.request().priority, Priority::Medium);
        assert!(form.request().is_empty());
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_next_field_cycles_through_buttons_row() {
        let mut form = ContactForm::new();
        for _ in 0..ContactField::ALL.len() {
            form.next_field();
        }
        assert!(form.is_buttons_row_active());
        assert!(form.active_form_field().is_none());

        form.next_field();
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_buttons_row() {
        let mut form = ContactForm::new();
        form.prev_field();
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = ContactForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, ContactField::ALL.len());
    }

    #[test]
    fn test_typing_into_text_field() {
        let mut form = focused_on(ContactField::Name);
        for c in "Alicex".chars() {
            form.input_char(c);
        }
        form.backspace();
        assert_eq!(form.request().name, "Alice");
    }

    #[test]
    fn test_typing_into_choice_field_is_ignored() {
        let mut form = focused_on(ContactField::ProjectType);
        form.input_char('x');
        form.backspace();
        assert_eq!(form.request().project_type, "");
    }

    #[test]
    fn test_newline_only_in_message() {
        let mut form = focused_on(ContactField::Subject);
        assert!(!form.insert_newline());

        let mut form = focused_on(ContactField::Message);
        form.input_char('a');
        assert!(form.insert_newline());
        form.input_char('b');
        assert_eq!(form.request().message, "a\nb");
    }

    #[test]
    fn test_cycling_choice_includes_unset_slot() {
        let mut form = focused_on(ContactField::Timeline);
        form.select_next_option();
        assert_eq!(form.request().timeline, "asap");

        form.select_prev_option();
        assert_eq!(form.request().timeline, "");

        form.select_prev_option();
        assert_eq!(form.request().timeline, "flexible");
    }

    #[test]
    fn test_cycling_priority() {
        let mut form = focused_on(ContactField::Priority);
        form.select_next_option();
        assert_eq!(form.request().priority, Priority::High);
        form.select_next_option();
        assert_eq!(form.request().priority, Priority::Low);
        form.select_prev_option();
        assert_eq!(form.request().priority, Priority::High);
    }

    #[test]
    fn test_cycling_on_buttons_row_switches_button() {
        let mut form = ContactForm::new();
        form.set_active_field(ContactField::ALL.len());
        form.select_next_option();
        assert_eq!(form.selected_button, FormButton::Clear);
        form.select_prev_option();
        assert_eq!(form.selected_button, FormButton::Send);
    }

    #[test]
    fn test_editing_ignored_while_submitting() {
        let mut form = focused_on(ContactField::Name);
        form.mark_submitting();
        form.input_char('A');
        form.apply_quick_action(QuickAction::Urgent);
        assert!(form.request().is_empty());

        form.mark_idle();
        form.input_char('A');
        assert_eq!(form.request().name, "A");
    }

    #[test]
    fn test_quick_action_consultation() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Alice").unwrap();
        form.apply_quick_action(QuickAction::Consultation);

        assert_eq!(form.request().name, "Alice");
        assert_eq!(form.request().subject, "Consultation Request");
        assert_eq!(form.request().project_type, "consultation");
        assert_eq!(form.request().priority, Priority::Medium);
        assert!(form.request().message.starts_with("Hello,\n\n"));
        assert_eq!(
            form.active_form_field().map(|f| f.field),
            Some(ContactField::Message)
        );
    }

    #[test]
    fn test_quick_action_urgent_raises_priority() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::ProjectType, "legal").unwrap();
        form.apply_quick_action(QuickAction::Urgent);

        assert_eq!(form.request().priority, Priority::High);
        assert_eq!(form.request().project_type, "legal");
    }
}
