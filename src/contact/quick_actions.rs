//! Pre-canned inquiry templates and mailto links

use super::request::Priority;

/// One-key shortcuts for common kinds of inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Email,
    Consultation,
    Project,
    Urgent,
    Call,
}

impl QuickAction {
    pub const ALL: [QuickAction; 5] = [
        QuickAction::Email,
        QuickAction::Consultation,
        QuickAction::Project,
        QuickAction::Urgent,
        QuickAction::Call,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Send Email",
            Self::Consultation => "Book Consultation",
            Self::Project => "Discuss Project",
            Self::Urgent => "Urgent Request",
            Self::Call => "Request Call",
        }
    }

    pub fn subject(&self) -> &'static str {
        match self {
            Self::Email => "General Inquiry",
            Self::Consultation => "Consultation Request",
            Self::Project => "Project Collaboration",
            Self::Urgent => "URGENT: Immediate Assistance Needed",
            Self::Call => "Phone Call Request",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Email => "Hello,\n\nI would like to discuss...",
            Self::Consultation => "Hello,\n\nI would like to book a consultation regarding...",
            Self::Project => {
                "Hello,\n\nI have a project opportunity that might interest you..."
            }
            Self::Urgent => "Hello,\n\nI need urgent assistance with...",
            Self::Call => {
                "Hello,\n\nI would prefer to discuss this over a phone call. My available times are..."
            }
        }
    }

    /// Project type implied by the action, if any
    pub fn project_type(&self) -> Option<&'static str> {
        match self {
            Self::Consultation => Some("consultation"),
            _ => None,
        }
    }

    /// Priority implied by the action, if any
    pub fn priority(&self) -> Option<Priority> {
        match self {
            Self::Urgent => Some(Priority::High),
            _ => None,
        }
    }

    pub fn mailto_link(&self, to: &str) -> String {
        mailto_link(to, self.subject(), self.message())
    }
}

/// Build a `mailto:` URL with an encoded subject and body
pub fn mailto_link(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let link = mailto_link("owner@example.com", "Hi there", "Line one\nLine & two");
        assert_eq!(
            link,
            "mailto:owner@example.com?subject=Hi%20there&body=Line%20one%0ALine%20%26%20two"
        );
    }

    #[test]
    fn test_urgent_action_link() {
        let link = QuickAction::Urgent.mailto_link("owner@example.com");
        assert!(link.starts_with("mailto:owner@example.com?subject=URGENT%3A%20Immediate"));
    }

    #[test]
    fn test_implied_fields() {
        assert_eq!(QuickAction::Consultation.project_type(), Some("consultation"));
        assert_eq!(QuickAction::Urgent.priority(), Some(Priority::High));
        assert_eq!(QuickAction::Email.project_type(), None);
        assert_eq!(QuickAction::Call.priority(), None);
    }

    #[test]
    fn test_every_action_has_greeting() {
        for action in QuickAction::ALL {
            assert!(action.message().starts_with("Hello,"));
            assert!(!action.label().is_empty());
        }
    }
}
