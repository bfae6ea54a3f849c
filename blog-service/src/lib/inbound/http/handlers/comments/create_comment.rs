use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::CommentRequest;
use crate::comment::errors::CommentError;
use crate::domain::post::models::PostId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CreatedResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
    Json(request): Json<CommentRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(CommentError::from)?;
    let body = request.try_into_body()?;

    state
        .comment_service
        .create_comment(post_id, caller.user_id, body)
        .await
        .map_err(ApiError::from)
        .map(|id| ApiSuccess::new(StatusCode::CREATED, CreatedResponseData { id: id.0 }))
}
