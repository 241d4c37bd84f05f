pub mod follow_query;
pub mod follow_repository;

pub use follow_query::{FollowQuery, FollowQueryError};
pub use follow_repository::{FollowRepository, FollowRepositoryError};
