pub mod contact_client;
pub mod contact_form;

pub use contact_client::{ContactClient, ContactClientError, SubmissionReceipt};
pub use contact_form::{ContactForm, FormStatus};
