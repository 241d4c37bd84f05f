pub mod create_post;
pub mod get_explore;
pub mod get_timeline;
pub mod get_user_posts;

pub use create_post::{create_post_handler, CreatePostRequestDto, CreatedPostResponse};
pub use get_explore::get_explore_handler;
pub use get_timeline::{get_timeline_handler, FeedQueryParams, FeedResponse, PostItem};
pub use get_user_posts::get_user_posts_handler;
