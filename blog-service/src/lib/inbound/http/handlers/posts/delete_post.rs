use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::post::models::PostId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::post::errors::PostError;

pub async fn delete_post(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(PostError::from)?;

    state
        .post_service
        .delete_post(post_id, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::ACCEPTED,
                MessageResponseData::new(format!("Post with id {} deleted.", post_id)),
            )
        })
}
