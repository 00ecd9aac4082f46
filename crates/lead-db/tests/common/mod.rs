use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A submission body shaped like what the API persists
pub fn sample_lead() -> serde_json::Value {
    serde_json::json!({
        "name": "Anna",
        "phone": "+371 20000000",
        "car_model": "Audi Q5",
        "budget": null,
        "email": null,
        "message": "Looking for 2021 or newer"
    })
}
