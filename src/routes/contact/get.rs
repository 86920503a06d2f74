use actix_web::{web, HttpResponse};
use anyhow::Context;
use sqlx::PgPool;

use crate::domain::ContactSubmission;
use crate::routes::contact::ListError;

/// Upper bound on the number of submissions returned by `list`.
pub const RECENT_SUBMISSIONS_LIMIT: i64 = 50;

// TODO: gate behind an authenticated admin session before exposing publicly.
#[tracing::instrument(name = "Listing recent contact submissions", skip(pool))]
pub async fn list(pool: web::Data<PgPool>) -> Result<HttpResponse, ListError> {
    let submissions = fetch_recent_contact_submissions(&pool, RECENT_SUBMISSIONS_LIMIT)
        .await
        .context("Failed to fetch recent contact submissions")?;

    Ok(HttpResponse::Ok().json(submissions))
}

/// Most recent submissions first, at most `limit` of them.
#[tracing::instrument(name = "Fetching recent contact submissions", skip(pool))]
pub async fn fetch_recent_contact_submissions(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<ContactSubmission>, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>(
        r#"
        SELECT id, name, email, subject, message, created_at
        FROM contact_submissions
        ORDER BY created_at DESC, id DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })
}
