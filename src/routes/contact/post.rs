use actix_web::{web, HttpResponse};
use anyhow::Context;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{ContactFormData, NewContactSubmission};
use crate::routes::contact::SubmitError;

#[derive(serde::Serialize)]
struct SubmitResponse {
    message: &'static str,
    id: Uuid,
}

#[tracing::instrument(
    name = "Submitting a contact form",
    skip(body, pool),
    fields(contact_email = tracing::field::Empty, submission_id = tracing::field::Empty)
)]
pub async fn submit(
    body: web::Json<ContactFormData>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, SubmitError> {
    let new_submission = NewContactSubmission::try_from(body.0).map_err(|e| {
        tracing::info!(error.details = ?e.violations(), "Rejected invalid contact form");
        SubmitError::ValidationError(e)
    })?;

    tracing::Span::current().record(
        "contact_email",
        &tracing::field::display(&new_submission.email),
    );

    let submission_id = insert_contact_submission(&pool, &new_submission)
        .await
        .context("Failed to insert new contact submission into the database")?;

    tracing::Span::current().record("submission_id", &tracing::field::display(&submission_id));

    Ok(HttpResponse::Ok().json(SubmitResponse {
        message: "Contact form submitted successfully",
        id: submission_id,
    }))
}

#[tracing::instrument(
    name = "Saving new contact submission in the database",
    skip(submission, pool)
)]
pub async fn insert_contact_submission(
    pool: &PgPool,
    submission: &NewContactSubmission,
) -> Result<Uuid, sqlx::Error> {
    let submission_id = Uuid::new_v4();
    sqlx::query(
        r#"
    INSERT INTO contact_submissions (id, name, email, subject, message, created_at)
    VALUES ($1, $2, $3, $4, $5, $6)
    "#,
    )
    .bind(submission_id)
    .bind(submission.name.as_ref())
    .bind(submission.email.as_ref())
    .bind(submission.subject.as_ref())
    .bind(submission.message.as_ref())
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;

    Ok(submission_id)
}
