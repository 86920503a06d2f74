pub mod contact_email;
pub mod contact_message;
pub mod contact_name;
pub mod contact_subject;
pub mod contact_submission;
pub mod new_contact_submission;

pub use contact_email::ContactEmail;
pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use contact_subject::ContactSubject;
pub use contact_submission::ContactSubmission;
pub use new_contact_submission::{
    ContactFormData, FieldViolation, NewContactSubmission, ValidationErrors,
};

/// Length of `s` in UTF-16 code units, the unit browsers count form input in.
pub(crate) fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
