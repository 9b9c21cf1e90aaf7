//! Form domain layer
//!
//! Type-safe editing of the contact request in the terminal.

mod field;
mod form_state;

pub use field::{form_fields, FieldKind, FormField};
pub use form_state::{ContactForm, Form, FormButton};
