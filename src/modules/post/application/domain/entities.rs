use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum post length, counted in characters after trimming.
pub const MAX_POST_CHARS: usize = 140;

/// A published post. Immutable once created; there is no edit or delete
/// operation on the write side.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
