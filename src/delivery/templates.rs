//! Email bodies for the owner notification and the submitter confirmation

use crate::contact::{label_for, ContactRequest, Priority, BUDGET_RANGES, TIMELINES};
use askama::Template;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identity of the person receiving contact requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerProfile {
    pub name: String,
    pub email: String,
}

/// A rendered email ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Fields shared by the HTML and text owner notification
struct NotificationDetails<'a> {
    request: &'a ContactRequest,
    project_label: &'a str,
    budget: &'a str,
    timeline: &'a str,
    received: String,
    response_window: &'static str,
    high_priority: bool,
    message_lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "emails/contact-notification.html")]
struct NotificationHtml<'a> {
    details: &'a NotificationDetails<'a>,
}

#[derive(Template)]
#[template(path = "emails/contact-notification.txt")]
struct NotificationText<'a> {
    details: &'a NotificationDetails<'a>,
}

#[derive(Template)]
#[template(path = "emails/contact-confirmation.html")]
struct ConfirmationHtml<'a> {
    name: &'a str,
    project_label: &'a str,
    owner: &'a OwnerProfile,
}

#[derive(Template)]
#[template(path = "emails/contact-confirmation.txt")]
struct ConfirmationText<'a> {
    name: &'a str,
    project_label: &'a str,
    owner: &'a OwnerProfile,
}

/// Notification sent to the owner for a new request
pub fn admin_notification(
    request: &ContactRequest,
    owner: &OwnerProfile,
    received_at: DateTime<Utc>,
) -> Result<EmailMessage, askama::Error> {
    let details = NotificationDetails {
        request,
        project_label: request
            .project_type_label()
            .unwrap_or(request.project_type.as_str()),
        budget: label_for(BUDGET_RANGES, &request.budget).unwrap_or(request.budget.as_str()),
        timeline: label_for(TIMELINES, &request.timeline).unwrap_or(request.timeline.as_str()),
        received: received_at.format("%A, %B %-d, %Y %H:%M UTC").to_string(),
        response_window: request.priority.response_window(),
        high_priority: request.priority == Priority::High,
        message_lines: request.message.lines().collect(),
    };

    Ok(EmailMessage {
        to: owner.email.clone(),
        subject: format!("New Contact Request: {}", request.subject),
        html: NotificationHtml { details: &details }.render()?,
        text: NotificationText { details: &details }.render()?,
    })
}

/// Acknowledgement sent back to the person who submitted the request
pub fn confirmation(
    request: &ContactRequest,
    owner: &OwnerProfile,
) -> Result<EmailMessage, askama::Error> {
    let name = request.name.as_str();
    let project_label = request
        .project_type_label()
        .unwrap_or(request.project_type.as_str());

    Ok(EmailMessage {
        to: request.email.clone(),
        subject: format!("Thank you for contacting {}", owner.name),
        html: ConfirmationHtml {
            name,
            project_label,
            owner,
        }
        .render()?,
        text: ConfirmationText {
            name,
            project_label,
            owner,
        }
        .render()?,
    })
}
