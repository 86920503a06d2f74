use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;

use crate::routes::contact::{json_error_handler, list, submit};
use crate::routes::health::health_check;

pub fn run(listener: TcpListener, db_pool: PgPool) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health", web::get().to(health_check))
            .service(
                web::resource("/api/contact")
                    .route(web::post().to(submit))
                    .route(web::get().to(list)),
            )
            .app_data(db_pool.clone())
    })
    .listen(listener)?
    .run())
}
