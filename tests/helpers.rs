use once_cell::sync::Lazy;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;

use portfolio::config::{get_configuration, Configuration, DatabaseSettings};
use portfolio::startup::{get_connection_pool, AppServer};
use portfolio::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            "test".into(),
            "debug".into(),
            std::io::stdout,
        ));
    } else {
        init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink));
    }
});

pub struct TestApp {
    pub addr: String,
    pub pool: PgPool,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.addr))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.addr))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_contacts(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/api/contact", &self.addr))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn valid_contact() -> serde_json::Value {
    serde_json::json!({
        "name": "Al",
        "email": "a@b.com",
        "subject": "Hi ther",
        "message": "This is a message",
    })
}

/// Spawns the server against a freshly created and migrated database.
pub async fn spawn_app() -> TestApp {
    let configuration = {
        let mut c = get_configuration().expect("should load configuration");
        c.database.database_name = Uuid::new_v4().to_string();
        c
    };

    configure_database(&configuration.database).await;

    launch(configuration).await
}

/// Spawns the server with a database address nothing listens on. Requests
/// that touch the store fail; requests that never reach it do not notice.
pub async fn spawn_app_with_unreachable_store() -> TestApp {
    let configuration = {
        let mut c = get_configuration().expect("should load configuration");
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind to random port");
        c.database.host = "127.0.0.1".into();
        c.database.port = listener.local_addr().unwrap().port();
        c.database.database_name = Uuid::new_v4().to_string();
        c
    };

    launch(configuration).await
}

async fn launch(mut configuration: Configuration) -> TestApp {
    Lazy::force(&TRACING);

    configuration.app.port = 0;

    let server = AppServer::build(configuration.clone())
        .await
        .expect("should have created server");

    let addr = format!("http://{}", server.to_server_address());
    let _ = tokio::spawn(server.run_until_stopped());

    TestApp {
        pool: get_connection_pool(&configuration.database),
        addr,
        api_client: reqwest::Client::new(),
    }
}

pub async fn configure_database(database_settings: &DatabaseSettings) -> PgPool {
    let mut db_connection = PgConnection::connect_with(&database_settings.without_db())
        .await
        .expect("failed to connect to postgres.");

    db_connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, database_settings.database_name).as_str())
        .await
        .expect("Failed to create database");

    let db_pool = PgPool::connect_with(database_settings.with_db())
        .await
        .expect("failed to connect to postgres.");

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to migrate the database");

    db_pool
}
