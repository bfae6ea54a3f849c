use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::parse_path;
use super::CommentRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn update_comment(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(String, String)>,
    Json(request): Json<CommentRequest>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let (post_id, comment_id) = parse_path(&post_id, &comment_id)?;
    let body = request.try_into_body()?;

    state
        .comment_service
        .update_comment(post_id, comment_id, body)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::ACCEPTED,
        MessageResponseData::new(format!("Comment with id {} updated.", comment_id)),
    ))
}
