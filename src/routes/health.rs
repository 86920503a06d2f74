use actix_web::{HttpResponse, Responder};

#[tracing::instrument(name = "Checking service health")]
pub async fn health_check() -> impl Responder {
    tracing::debug!("Service is healthy!");
    HttpResponse::Ok().finish()
}
