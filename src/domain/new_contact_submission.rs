//! src/domain/new_contact_submission.rs

use serde_json::Value;

use crate::domain::{ContactEmail, ContactMessage, ContactName, ContactSubject};

/// Raw contact form as submitted by a browser or [`crate::client::ContactClient`].
///
/// Fields are kept as untyped JSON so that a missing or mistyped field is
/// reported as a violation alongside the others instead of failing the whole
/// body at deserialization.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default)]
pub struct ContactFormData {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub subject: Option<Value>,
    pub message: Option<Value>,
}

impl ContactFormData {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            email: Some(Value::String(email.into())),
            subject: Some(Value::String(subject.into())),
            message: Some(Value::String(message.into())),
        }
    }
}

/// One field that failed validation, and why.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every violation found in a single form, in field order.
#[derive(thiserror::Error, Debug, Clone)]
#[error("Invalid form data")]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.0
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.field.as_str()).collect()
    }
}

impl From<Vec<FieldViolation>> for ValidationErrors {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }
}

/// A contact submission that satisfies every field constraint.
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessage,
}

fn check<T>(
    field: &str,
    label: &str,
    value: Option<Value>,
    parse: fn(String) -> Result<T, String>,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    let value = match value {
        Some(Value::String(value)) => value,
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new(field, format!("{} is required", label)));
            return None;
        }
        Some(_) => {
            violations.push(FieldViolation::new(
                field,
                format!("{} must be a string", label),
            ));
            return None;
        }
    };

    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(message) => {
            violations.push(FieldViolation::new(field, message));
            None
        }
    }
}

impl TryFrom<ContactFormData> for NewContactSubmission {
    type Error = ValidationErrors;

    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();

        let name = check("name", "Name", form.name, ContactName::parse, &mut violations);
        let email = check("email", "Email", form.email, ContactEmail::parse, &mut violations);
        let subject = check(
            "subject",
            "Subject",
            form.subject,
            ContactSubject::parse,
            &mut violations,
        );
        let message = check(
            "message",
            "Message",
            form.message,
            ContactMessage::parse,
            &mut violations,
        );

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(ValidationErrors(violations)),
        }
    }
}

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok};
    use serde_json::json;

    use super::{ContactFormData, NewContactSubmission};

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactFormData {
        ContactFormData::new(name, email, subject, message)
    }

    #[test]
    fn a_minimal_valid_form_is_accepted() {
        let outcome = NewContactSubmission::try_from(form(
            "Al",
            "a@b.com",
            "Hi ther",
            "This is a message",
        ));
        assert_ok!(outcome);
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let errors =
            NewContactSubmission::try_from(form("A", "bad", "Hi", "short")).unwrap_err();

        assert_eq!(errors.fields(), vec!["name", "email", "subject", "message"]);
        assert_eq!(
            errors.violations()[1].message,
            "Invalid email address".to_string()
        );
    }

    #[test]
    fn only_the_invalid_field_is_reported() {
        let errors = NewContactSubmission::try_from(form(
            "Ursula",
            "ursula@example.com",
            "Hi",
            "A message long enough",
        ))
        .unwrap_err();

        assert_eq!(errors.fields(), vec!["subject"]);
    }

    #[test]
    fn missing_fields_are_reported_as_required() {
        let data = ContactFormData {
            name: Some(json!("Ursula")),
            ..ContactFormData::default()
        };

        let errors = NewContactSubmission::try_from(data).unwrap_err();

        assert_eq!(errors.fields(), vec!["email", "subject", "message"]);
        assert_eq!(errors.violations()[0].message, "Email is required");
    }

    #[test]
    fn a_non_string_field_is_reported_next_to_the_others() {
        let data: ContactFormData = serde_json::from_value(json!({
            "name": 5,
            "email": "bad",
            "subject": "Hi",
            "message": "short",
        }))
        .unwrap();

        let errors = NewContactSubmission::try_from(data).unwrap_err();

        assert_eq!(errors.fields(), vec!["name", "email", "subject", "message"]);
        assert_eq!(errors.violations()[0].message, "Name must be a string");
    }

    #[test]
    fn null_fields_are_reported_as_required() {
        let data: ContactFormData = serde_json::from_value(json!({
            "name": null,
            "email": "a@b.com",
            "subject": "Hi ther",
            "message": "This is a message",
        }))
        .unwrap();

        let errors = NewContactSubmission::try_from(data).unwrap_err();

        assert_eq!(errors.fields(), vec!["name"]);
        assert_eq!(errors.violations()[0].message, "Name is required");
    }

    #[test]
    fn an_empty_form_fails_every_field() {
        assert_err!(NewContactSubmission::try_from(ContactFormData::default()));
    }
}
