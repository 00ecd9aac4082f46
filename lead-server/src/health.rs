use crate::AppState;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

/// GET / - Root greeting
///
/// The deployed frontend matches on this exact string, keep it stable.
pub async fn root() -> impl IntoResponse {
    Json(json!({"message": "Hello from FastAPI Backend!"}))
}

/// GET /api/hello - API reachability check
pub async fn hello() -> impl IntoResponse {
    Json(json!({"message": "Hello from the backend API!"}))
}

/// GET /test - Environment diagnostics
///
/// Reports storage reachability and which configuration values are present.
/// Never fails: every probe error is rendered as a string field instead.
pub async fn diagnostics(State(state): State<AppState>) -> impl IntoResponse {
    let mut response = json!({
        "backend": "running",
        "database": "not configured",
        "connection_status": "Not Connected",
        "collections": [],
        "database_url": flag(state.config.database.url.is_some()),
        "database_name": flag(state.config.database.name.is_some()),
    });

    if let Some(ref store) = state.store {
        match store.health_check().await {
            Ok(()) => {
                response["database"] = json!("connected");
                response["connection_status"] = json!("Connected");

                match store.list_collections(10).await {
                    Ok(names) => response["collections"] = json!(names),
                    Err(e) => response["database"] = json!(truncated_error(&e.to_string())),
                }
            }
            Err(e) => response["database"] = json!(truncated_error(&e.to_string())),
        }
    }

    Json(response)
}

fn flag(present: bool) -> &'static str {
    if present { "set" } else { "not set" }
}

/// First 50 chars of the message, so a probe failure stays one line.
fn truncated_error(message: &str) -> String {
    format!("error: {:.50}", message)
}
