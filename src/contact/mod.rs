//! Contact request domain
//!
//! The request entity, its option catalog, the validator and the quick
//! contact action templates.

mod options;
mod quick_actions;
mod request;
mod validation;

pub use options::{
    cycle_option, find_option, label_for, OptionEntry, BUDGET_RANGES, PRIORITIES, PROJECT_TYPES,
    TIMELINES,
};
pub use quick_actions::{mailto_link, QuickAction};
pub use request::{ContactField, ContactRequest, FormError, Priority};
pub use validation::{validate, FieldViolation, ValidationErrors, ViolationReason};
