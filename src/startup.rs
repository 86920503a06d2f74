use std::net::TcpListener;

use actix_web::dev::Server;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{Configuration, DatabaseSettings};
use crate::run::run;

/// A bound, not yet running, HTTP server.
pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, std::io::Error> {
        let db_pool = get_connection_pool(&configuration.database);

        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.app.host, configuration.app.port
        ))?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "Starting service on address: {}:{}",
            configuration.app.host,
            port
        );

        let server = run(listener, db_pool)?;

        Ok(Self {
            port,
            address: configuration.app.host,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn address(&self) -> String {
        self.address.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Lazily connected pool; nothing talks to Postgres until the first query.
pub fn get_connection_pool(database: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .connect_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(database.with_db())
}
