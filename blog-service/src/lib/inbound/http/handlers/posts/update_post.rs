use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::PostRequest;
use crate::domain::post::models::PostId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::post::errors::PostError;

pub async fn update_post(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
    Json(body): Json<PostRequest>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(PostError::from)?;
    let post = body.try_into_post()?;

    state
        .post_service
        .update_post(post_id, caller.user_id, post)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::ACCEPTED,
        MessageResponseData::new(format!("Post with id {} updated.", post_id)),
    ))
}
