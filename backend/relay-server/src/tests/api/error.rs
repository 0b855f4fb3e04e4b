use crate::ApiError;

use relay_auth::AuthError;
use relay_core::CoreError;
use relay_sms::SmsError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn into_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_without_details() {
    let (status, json) = into_json(ApiError::validation("Email and password are required")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Email and password are required");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_malformed_body_returns_400_with_details() {
    let (status, json) = into_json(ApiError::malformed_body("expected value at line 1")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Malformed JSON body");
    assert_eq!(json["details"], "expected value at line 1");
}

#[tokio::test]
async fn test_invalid_credentials_returns_fixed_message() {
    let (status, json) = into_json(ApiError::invalid_credentials()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_not_configured_returns_500() {
    let (status, json) = into_json(ApiError::not_configured("TWILIO_FROM not set in environment")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "TWILIO_FROM not set in environment");
}

#[tokio::test]
async fn test_email_taken_maps_to_user_already_exists() {
    let core = CoreError::EmailTaken {
        email: "ada@example.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_json(ApiError::from(core)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "User already exists");
}

#[tokio::test]
async fn test_core_validation_keeps_message() {
    let core = CoreError::Validation {
        message: "name cannot be empty".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_json(ApiError::from(core)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "name cannot be empty");
}

#[tokio::test]
async fn test_auth_error_is_internal_and_hides_details() {
    let auth = AuthError::HashingTask {
        message: "task panicked".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_json(ApiError::from(auth)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
    assert!(!json.to_string().contains("task panicked"));
}

#[tokio::test]
async fn test_provider_error_carries_provider_message_as_details() {
    let sms = SmsError::Provider {
        status: 400,
        code: Some(21211),
        message: "The 'To' number +1555 is not a valid phone number.".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_json(ApiError::from(sms)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to send SMS");
    assert_eq!(
        json["details"],
        "The 'To' number +1555 is not a valid phone number."
    );
}
