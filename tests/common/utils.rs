#![allow(dead_code)]
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{PgPool, PgConnection, Connection, Executor};
use std::net::TcpListener;
use uuid::Uuid;
use once_cell::sync::Lazy;
use reqwest::Client;

use fantasy_league_backend::run;
use fantasy_league_backend::config::league::LeagueSettings;
use fantasy_league_backend::config::settings::{get_config, DatabaseSettings, get_jwt_settings};
use fantasy_league_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub league_settings: LeagueSettings,
}

pub struct TestUser {
    pub user_id: Uuid,
    pub username: String,
    pub token: String,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    // Fresh database per test
    configuration.database.db_name = Uuid::new_v4().to_string();
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database).await;
    let jwt_settings = get_jwt_settings(&configuration);
    let league_settings = configuration.league.clone();

    let server = run(
        listener,
        connection_pool.clone(),
        jwt_settings,
        league_settings.clone(),
    )
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
        league_settings,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect(
            &config.connection_string_without_db()
        )
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

pub async fn register_user(app_address: &str, prefix: &str) -> (String, String) {
    let client = Client::new();
    let username = format!("{}{}", prefix, Uuid::new_v4().simple());
    let password = "password123".to_string();
    let email = format!("{}@example.com", username);

    let response = client
        .post(&format!("{}/register_user", app_address))
        .json(&json!({
            "username": username,
            "password": password,
            "email": email
        }))
        .send()
        .await
        .expect("Failed to register user.");
    assert_eq!(200, response.status().as_u16(), "Registration should succeed");

    (username, password)
}

pub async fn login(app_address: &str, username: &str, password: &str) -> String {
    let response = Client::new()
        .post(&format!("{}/login", app_address))
        .json(&json!({
            "username": username,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to execute login request.");
    assert_eq!(200, response.status().as_u16(), "Login should succeed");

    let body: serde_json::Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

pub async fn create_test_user_and_login(app: &TestApp) -> TestUser {
    let (username, password) = register_user(&app.address, "player").await;
    let token = login(&app.address, &username, &password).await;
    let user_id = user_id_for(&app.db_pool, &username).await;

    TestUser { user_id, username, token }
}

/// Registers a user, promotes it to admin directly in the database, then logs in
/// so the token carries the admin role.
pub async fn create_admin_user_and_login(app: &TestApp) -> TestUser {
    let (username, password) = register_user(&app.address, "admin").await;

    sqlx::query("UPDATE users SET role = 'admin' WHERE username = $1")
        .bind(&username)
        .execute(&app.db_pool)
        .await
        .expect("Failed to promote user to admin");

    let token = login(&app.address, &username, &password).await;
    let user_id = user_id_for(&app.db_pool, &username).await;

    TestUser { user_id, username, token }
}

async fn user_id_for(pool: &PgPool, username: &str) -> Uuid {
    sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
        .bind(username)
        .fetch_one(pool)
        .await
        .expect("Failed to fetch user id")
}

pub async fn make_authenticated_request(
    client: &Client,
    method: reqwest::Method,
    url: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> reqwest::Response {
    let mut request = client
        .request(method, url)
        .header("Authorization", format!("Bearer {}", token));

    if let Some(body) = body {
        request = request.json(&body);
    }

    request.send().await.expect("Failed to execute request.")
}
