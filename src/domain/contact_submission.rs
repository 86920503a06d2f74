//! src/domain/contact_submission.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored contact submission, as returned by `GET /api/contact`.
#[derive(serde::Serialize, serde::Deserialize, sqlx::FromRow, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
