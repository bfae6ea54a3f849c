use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::post::models::PostId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CommentListData;
use crate::inbound::http::router::AppState;

pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<CommentListData>, ApiError> {
    let post_id =
        PostId::from_string(&post_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .comment_service
        .list_comments(post_id)
        .await
        .map_err(ApiError::from)
        .map(|comments| ApiSuccess::new(StatusCode::OK, comments.as_slice().into()))
}
