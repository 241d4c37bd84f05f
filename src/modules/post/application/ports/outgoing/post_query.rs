// src/modules/post/application/ports/outgoing/post_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// A post as rendered in a feed, with its author resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub const MAX_PER_PAGE: u32 = 100;

    /// Normalizes raw query parameters: 1-based page, clamped page size.
    pub fn resolve(page: Option<u32>, per_page: Option<u32>, default_per_page: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .unwrap_or(default_per_page)
                .clamp(1, Self::MAX_PER_PAGE),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        (self.page as u64) * (self.per_page as u64) < self.total
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side; the timeline joins the follower graph)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostQuery: Send + Sync {
    /// Posts by users the viewer follows, plus the viewer's own,
    /// newest first.
    async fn timeline(
        &self,
        viewer: UserId,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, PostQueryError>;

    /// Every post on the site, newest first.
    async fn explore(&self, page: PageRequest) -> Result<PageResult<PostView>, PostQueryError>;

    /// One author's posts, newest first.
    async fn by_user(
        &self,
        author: UserId,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, PostQueryError>;

    /// Post count for the profile header.
    async fn count_by_user(&self, author: UserId) -> Result<u64, PostQueryError>;
}
