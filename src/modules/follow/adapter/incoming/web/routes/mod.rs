pub mod follow_user;
pub mod unfollow_user;

pub use follow_user::{follow_user_handler, FollowResponse};
pub use unfollow_user::{unfollow_user_handler, UnfollowResponse};
