//! src/client/contact_form.rs

use crate::client::ContactClient;
use crate::domain::{ContactFormData, FieldViolation, NewContactSubmission};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to send message. Please try again.";

/// Outcome of the last attempt. Each attempt that reaches the server ends
/// in exactly one of `Succeeded` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Succeeded(String),
    Failed(String),
}

/// Client side state of the contact form.
///
/// [`ContactForm::submit`] borrows the form mutably until the response is
/// in, so no second submission can start while one is in flight; that
/// borrow is what disables the submit control.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    status: FormStatus,
    field_errors: Vec<FieldViolation>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            status: FormStatus::Idle,
            field_errors: Vec::new(),
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Violations found by the last local validation, empty if it passed.
    pub fn field_errors(&self) -> &[FieldViolation] {
        &self.field_errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }

    fn data(&self) -> ContactFormData {
        ContactFormData::new(
            self.name.as_str(),
            self.email.as_str(),
            self.subject.as_str(),
            self.message.as_str(),
        )
    }

    /// Runs the shared field checks and records every violation.
    pub fn validate(&mut self) -> bool {
        match NewContactSubmission::try_from(self.data()) {
            Ok(_) => {
                self.field_errors.clear();
                true
            }
            Err(errors) => {
                self.field_errors = errors.into_violations();
                false
            }
        }
    }

    /// Validates locally and, if the form is valid, sends it once.
    ///
    /// A locally invalid form sends nothing and leaves the status as it was;
    /// the per-field messages are available from [`ContactForm::field_errors`].
    pub async fn submit(&mut self, client: &ContactClient) -> &FormStatus {
        if !self.validate() {
            return &self.status;
        }

        self.status = match client.submit(&self.data()).await {
            Ok(receipt) => {
                tracing::info!(submission_id = %receipt.id, "Contact form accepted");
                self.clear();
                FormStatus::Succeeded(SUCCESS_MESSAGE.to_string())
            }
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Contact form submission failed");
                FormStatus::Failed(
                    e.user_message()
                        .unwrap_or(FALLBACK_ERROR_MESSAGE)
                        .to_string(),
                )
            }
        };

        &self.status
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}
