//! Account REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, JsonBody, LoginRequest, SignupRequest,
    api::error::USER_EXISTS,
};

use relay_core::NewUser;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use log::info;

pub const SIGNUP_FIELDS_REQUIRED: &str = "Name, email, and password are required";
pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";

// =============================================================================
// Handlers
// =============================================================================

/// POST /signup
///
/// Register a user and return a session token
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let fields = request
        .into_fields()
        .ok_or_else(|| ApiError::validation(SIGNUP_FIELDS_REQUIRED))?;

    // Skip hashing for an obvious duplicate; insert below is authoritative
    if state.users.find_by_email(&fields.email).await?.is_some() {
        return Err(ApiError::Conflict {
            message: USER_EXISTS.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_hash = state.password_hasher.hash(&fields.password).await?;
    let new_user = NewUser::new(fields.name, fields.email, password_hash)?;
    let user = state.users.insert(new_user).await?;

    let token = state.tokens.issue(user.id, &user.email)?;

    info!("User {} signed up as {}", user.id, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// POST /login
///
/// Exchange email and password for a session token
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (email, password) = request
        .into_credentials()
        .ok_or_else(|| ApiError::validation(LOGIN_FIELDS_REQUIRED))?;

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    if !state
        .password_hasher
        .verify(&password, &user.password_hash)
        .await?
    {
        return Err(ApiError::invalid_credentials());
    }

    let token = state.tokens.issue(user.id, &user.email)?;

    info!("User {} logged in", user.id);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
