pub mod create_post;
pub mod get_explore;
pub mod get_timeline;
pub mod get_user_posts;
