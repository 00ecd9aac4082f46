use crate::ApiError;

use lead_core::{ErrorLocation, Lead};

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_validation_error_returns_422_with_detail() {
    let error = ApiError::Validation {
        message: "name must not be empty".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["detail"], "name must not be empty");
}

#[tokio::test]
async fn test_persistence_error_returns_500_with_db_prefix() {
    let error = ApiError::Persistence {
        message: "no such table: documents".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["detail"], "DB error: no such table: documents");
}

#[test]
fn test_lead_validation_error_converts_to_validation() {
    let lead = Lead::new("".to_string(), "+79001234567".to_string());
    let api_err: ApiError = lead.validate().unwrap_err().into();

    match api_err {
        ApiError::Validation { message, .. } => {
            assert!(message.contains("name"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_db_error_converts_to_persistence() {
    let db_err = lead_db::DbError::from(sqlx::Error::RowNotFound);
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Persistence { message, .. } => {
            assert!(!message.is_empty());
        }
        _ => panic!("Expected Persistence error"),
    }
}
