use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::PostRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CreatedResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<PostRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    let post = body.try_into_post()?;

    state
        .post_service
        .create_post(caller.user_id, post)
        .await
        .map_err(ApiError::from)
        .map(|id| ApiSuccess::new(StatusCode::CREATED, CreatedResponseData { id: id.0 }))
}
