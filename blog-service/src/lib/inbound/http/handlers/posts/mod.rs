pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod list_posts;
pub mod list_user_posts;
pub mod update_post;

pub use create_post::create_post;
pub use delete_post::delete_post;
pub use get_post::get_post;
pub use list_posts::list_posts;
pub use list_user_posts::list_user_posts;
pub use update_post::update_post;

use serde::Deserialize;

use crate::domain::post::models::NewPost;
use crate::domain::post::models::PostAnons;
use crate::domain::post::models::PostTitle;
use crate::post::errors::PostError;

/// HTTP request body shared by create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostRequest {
    title: String,
    anons: String,
}

impl PostRequest {
    fn try_into_post(self) -> Result<NewPost, PostError> {
        let title = PostTitle::new(self.title)?;
        let anons = PostAnons::new(self.anons)?;
        Ok(NewPost::new(title, anons))
    }
}
