pub mod comment;
pub mod post;
pub mod user;

pub use comment::PostgresCommentRepository;
pub use post::PostgresPostRepository;
pub use user::PostgresUserRepository;
