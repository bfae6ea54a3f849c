pub mod create_comment;
pub mod delete_comment;
pub mod list_comments;
pub mod update_comment;

pub use create_comment::create_comment;
pub use delete_comment::delete_comment;
pub use list_comments::list_comments;
pub use update_comment::update_comment;

use serde::Deserialize;

use crate::comment::errors::CommentError;
use crate::domain::comment::models::CommentBody;
use crate::domain::comment::models::CommentId;
use crate::domain::post::models::PostId;

/// HTTP request body shared by create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommentRequest {
    body: String,
}

impl CommentRequest {
    fn try_into_body(self) -> Result<CommentBody, CommentError> {
        Ok(CommentBody::new(self.body)?)
    }
}

fn parse_path(post_id: &str, comment_id: &str) -> Result<(PostId, CommentId), CommentError> {
    Ok((
        PostId::from_string(post_id)?,
        CommentId::from_string(comment_id)?,
    ))
}
