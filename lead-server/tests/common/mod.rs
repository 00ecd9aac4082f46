#![allow(dead_code)]

//! Test infrastructure for lead-server API tests

use lead_config::Config;
use lead_db::DocumentStore;
use lead_notify::{NotifierConfig, TelegramNotifier};
use lead_server::AppState;

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Create a test pool with in-memory SQLite
///
/// Single connection so every handle sees the same in-memory database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/lead-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState with a working store and no notifier
pub async fn create_test_app_state() -> AppState {
    AppState {
        store: Some(DocumentStore::new(create_test_pool().await)),
        notifier: None,
        config: Config::default(),
    }
}

/// Notifier pointed at a mock Bot API
pub fn test_notifier(api_base: String) -> TelegramNotifier {
    TelegramNotifier::with_config(
        "123:abc".to_string(),
        "42".to_string(),
        NotifierConfig {
            api_base,
            timeout: Duration::from_secs(2),
        },
    )
    .expect("Failed to build notifier")
}

/// A valid submission body
pub fn lead_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Ivan",
        "phone": "+79001234567",
        "car_model": "Toyota Camry",
        "message": "call after 18:00"
    })
}
