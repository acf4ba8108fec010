//! "Contact Us" form.

use serde::{Deserialize, Serialize};

use crate::email::is_valid_email;
use crate::error::CommerceError;
use crate::notice::Notice;

/// Subjects offered in the form's drop-down, as (value, label).
pub const CONTACT_SUBJECTS: [(&str, &str); 5] = [
    ("general", "General Inquiry"),
    ("product", "Product Question"),
    ("support", "Technical Support"),
    ("partnership", "Partnership"),
    ("other", "Other"),
];

/// Label for a subject value.
pub fn subject_label(value: &str) -> Option<&'static str> {
    CONTACT_SUBJECTS
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| *label)
}

/// Contact form fields as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

/// A validated contact request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Check required fields and the e-mail format.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        if !missing.is_empty() {
            return Err(CommerceError::IncompleteContactForm { missing });
        }

        // Same rule as the assistant: the address is checked as typed.
        if !is_valid_email(&self.email) {
            return Err(CommerceError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Validate and take the request, leaving the form blank.
    ///
    /// On failure the form keeps what was typed.
    pub fn submit(&mut self) -> Result<(ContactRequest, Notice), CommerceError> {
        if let Err(err) = self.validate() {
            tracing::warn!(error = %err, "contact form rejected");
            return Err(err);
        }

        let form = std::mem::take(self);
        let request = ContactRequest {
            name: form.name.trim().to_string(),
            email: form.email,
            phone: non_empty(form.phone),
            subject: non_empty(form.subject),
            message: form.message.trim().to_string(),
        };
        tracing::info!(subject = ?request.subject, "contact request submitted");
        Ok((
            request,
            Notice::success(
                "Thank you! Your message has been sent successfully. We'll get back to you soon.",
            ),
        ))
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Alex Kim".to_string(),
            email: "alex@example.com".to_string(),
            phone: String::new(),
            subject: "product".to_string(),
            message: "Where is my rack?".to_string(),
        }
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = filled();
        let (request, notice) = form.submit().unwrap();
        assert_eq!(request.phone, None);
        assert_eq!(request.subject.as_deref(), Some("product"));
        assert_eq!(subject_label("product"), Some("Product Question"));
        assert!(notice.message.starts_with("Thank you!"));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_missing_required_fields() {
        let mut form = ContactForm {
            message: String::new(),
            ..filled()
        };
        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields");
        assert_eq!(form.name, "Alex Kim");
    }

    #[test]
    fn test_invalid_email() {
        let mut form = ContactForm {
            email: "alex@example".to_string(),
            ..filled()
        };
        assert_eq!(
            form.submit(),
            Err(CommerceError::InvalidEmail("alex@example".to_string()))
        );
    }

    #[test]
    fn test_email_checked_as_typed() {
        let mut form = ContactForm {
            email: " alex@example.com".to_string(),
            ..filled()
        };
        assert_eq!(
            form.submit(),
            Err(CommerceError::InvalidEmail(" alex@example.com".to_string()))
        );
    }
}
