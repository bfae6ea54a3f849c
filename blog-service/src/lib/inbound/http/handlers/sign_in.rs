use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Password;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<ApiSuccess<SignInResponseData>, ApiError> {
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;
    let password = Password::for_login(body.password);

    state
        .auth_service
        .check_username_exists(&username)
        .await
        .map_err(credential_error)?;

    state
        .auth_service
        .login(&username, &password)
        .await
        .map_err(credential_error)
        .map(|token| ApiSuccess::new(StatusCode::OK, SignInResponseData { token }))
}

/// Unknown username and wrong password must look the same to the caller.
fn credential_error(err: UserError) -> ApiError {
    match err {
        UserError::NotFoundByUsername(_) | UserError::InvalidCredentials => {
            ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
        }
        _ => ApiError::from(err),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInResponseData {
    pub token: String,
}
