use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn delete_comment(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let (post_id, comment_id) = parse_path(&post_id, &comment_id)?;

    state
        .comment_service
        .delete_comment(post_id, comment_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::ACCEPTED,
                MessageResponseData::new(format!("Comment with id {} deleted.", comment_id)),
            )
        })
}
