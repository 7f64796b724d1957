//! RFQ e-mail composition.
//!
//! The engine only builds `{subject, body, recipients}` tuples; opening a
//! mail composer or actually sending mail is the caller's concern.

use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder used when the project has no due date.
pub const DUE_DATE_TBD: &str = "[Due Date TBD]";

/// Placeholder used when the project has no file link.
pub const FILE_LINK_TBD: &str = "[Insert project files link here]";

/// A composed message ready for an external mail dispatcher.
#[derive(Debug, Clone, Serialize)]
pub struct MailMessage {
    pub subject: String,
    pub body: String,
    pub recipients: Vec<String>,
}

/// First whitespace-delimited token of a contact name.
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// Human-format a due date (e.g. `June 3, 2026`), or the TBD placeholder.
pub fn format_due_date(due_date: Option<NaiveDate>) -> String {
    match due_date {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => DUE_DATE_TBD.to_string(),
    }
}

fn body_core(project_name: &str, due_date_str: &str, file_link: &str, reply_to: &str) -> String {
    format!(
        "We are requesting a quote for the {project_name} project. Please review the project \
         documents and provide pricing for your scope of work.\n\n\
         Our bid is due on {due_date_str}, so we must receive your quote no later than \
         that date. Earlier submission is strongly preferred to allow adequate time for \
         review.\n\n\
         The project files are available at the link below:\n{file_link}\n\n\
         If you have any questions or need additional information, please contact us as \
         soon as possible. Bids should be sent to: {reply_to}.\n\n\
         Thank you for your prompt attention to this request.\n\nThanks,"
    )
}

/// Compose the single-contact quote request.
///
/// The salutation uses the contact's first name; replies are directed to
/// the fixed `reply_to` address.
pub fn quote_request(
    project_name: &str,
    contact_name: &str,
    recipient: &str,
    due_date: Option<NaiveDate>,
    file_url: Option<&str>,
    reply_to: &str,
) -> MailMessage {
    let due = format_due_date(due_date);
    let link = file_url.unwrap_or(FILE_LINK_TBD);
    MailMessage {
        subject: format!("Request for Quote - {project_name}"),
        body: format!(
            "Hi {},\n\n{}",
            first_name(contact_name),
            body_core(project_name, &due, link, reply_to)
        ),
        recipients: vec![recipient.to_string()],
    }
}

/// Compose the company-wide quote request: a depersonalized salutation and
/// all addresses combined into a single recipient list.
pub fn company_quote_request(
    project_name: &str,
    recipients: Vec<String>,
    due_date: Option<NaiveDate>,
    file_url: Option<&str>,
    reply_to: &str,
) -> MailMessage {
    let due = format_due_date(due_date);
    let link = file_url.unwrap_or(FILE_LINK_TBD);
    MailMessage {
        subject: format!("Request for Quote - {project_name}"),
        body: format!("Hi,\n\n{}", body_core(project_name, &due, link, reply_to)),
        recipients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY_TO: &str = "Estimating@kennyseng.com";

    #[test]
    fn first_name_takes_first_token() {
        assert_eq!(first_name("Jane Doe"), "Jane");
        assert_eq!(first_name("Jane"), "Jane");
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn due_date_formats_human_readable() {
        let d = NaiveDate::from_ymd_opt(2026, 6, 3).unwrap();
        assert_eq!(format_due_date(Some(d)), "June 3, 2026");
    }

    #[test]
    fn missing_due_date_uses_placeholder() {
        assert_eq!(format_due_date(None), DUE_DATE_TBD);
    }

    #[test]
    fn single_message_personalizes_salutation() {
        let msg = quote_request(
            "Cedar Creek Bridge",
            "Jane Doe",
            "jane@acme.com",
            None,
            None,
            REPLY_TO,
        );
        assert_eq!(msg.subject, "Request for Quote - Cedar Creek Bridge");
        assert!(msg.body.starts_with("Hi Jane,\n\n"));
        assert!(msg
            .body
            .contains("We are requesting a quote for the Cedar Creek Bridge project."));
        assert!(msg.body.contains(DUE_DATE_TBD));
        assert!(msg.body.contains(FILE_LINK_TBD));
        assert!(msg.body.contains(REPLY_TO));
        assert_eq!(msg.recipients, vec!["jane@acme.com"]);
    }

    #[test]
    fn single_message_interpolates_date_and_link() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        let msg = quote_request(
            "Cedar Creek Bridge",
            "Jane Doe",
            "jane@acme.com",
            Some(d),
            Some("https://files.example.com/p/1"),
            REPLY_TO,
        );
        assert!(msg.body.contains("January 9, 2026"));
        assert!(msg.body.contains("https://files.example.com/p/1"));
        assert!(!msg.body.contains(DUE_DATE_TBD));
    }

    #[test]
    fn company_message_depersonalizes_and_combines_recipients() {
        let msg = company_quote_request(
            "Cedar Creek Bridge",
            vec!["a@x.com".into(), "b@y.com".into()],
            None,
            None,
            REPLY_TO,
        );
        assert!(msg.body.starts_with("Hi,\n\n"));
        assert!(msg.body.contains("Cedar Creek Bridge project"));
        assert_eq!(msg.recipients.len(), 2);
    }
}
