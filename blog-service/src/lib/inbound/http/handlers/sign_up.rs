use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CreatedResponseData;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|id| ApiSuccess::new(StatusCode::CREATED, CreatedResponseData { id: id.0 }))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignUpRequest {
    name: String,
    username: String,
    password: String,
}

impl SignUpRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, UserError> {
        let name = DisplayName::new(self.name)?;
        let username = Username::new(self.username)?;
        let password = Password::new(self.password)?;
        Ok(RegisterUserCommand::new(name, username, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_is_rejected() {
        let request = SignUpRequest {
            name: "Alice".to_string(),
            username: "alice".to_string(),
            password: "123".to_string(),
        };

        assert!(matches!(
            request.try_into_command(),
            Err(UserError::InvalidPassword(_))
        ));
    }
}
