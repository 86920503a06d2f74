//! src/client/contact_client.rs

use reqwest::{Client, StatusCode};
use uuid::Uuid;

use crate::domain::ContactFormData;

/// Body of a successful `POST /api/contact`.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct SubmissionReceipt {
    pub message: String,
    pub id: Uuid,
}

#[derive(serde::Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ContactClientError {
    /// The server refused the submission and said why.
    #[error("{0}")]
    Rejected(String),

    #[error("The contact endpoint responded with {0}")]
    UnexpectedStatus(StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ContactClientError {
    /// Message fit for showing to the person who filled in the form.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ContactClientError::Rejected(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

pub struct ContactClient {
    http_client: Client,
    base_url: String,
}

impl ContactClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: Client::builder().timeout(timeout).build()?,
            base_url,
        })
    }

    /// Sends one contact form. Never retries.
    #[tracing::instrument(name = "Sending contact form", skip(self, form))]
    pub async fn submit(
        &self,
        form: &ContactFormData,
    ) -> Result<SubmissionReceipt, ContactClientError> {
        let url = format!("{}/api/contact", self.base_url);

        let response = self.http_client.post(&url).json(form).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<SubmissionReceipt>().await?);
        }

        match response.json::<ErrorResponse>().await {
            Ok(ErrorResponse {
                error: Some(message),
            }) => Err(ContactClientError::Rejected(message)),
            _ => Err(ContactClientError::UnexpectedStatus(status)),
        }
    }
}
