// src/modules/post/adapter/outgoing/post_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::follow::adapter::outgoing::sea_orm_entity::follows;
use crate::modules::post::adapter::outgoing::sea_orm_entity::posts::{self, Column, Entity};
use crate::modules::post::application::ports::outgoing::post_query::{
    PageRequest, PageResult, PostQuery, PostQueryError, PostView,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Count, page and order a post query, then resolve authors.
    async fn run_paged(
        &self,
        query: Select<Entity>,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, PostQueryError> {
        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let offset = (page.page.saturating_sub(1) as u64) * page.per_page as u64;
        let post_models = query
            .order_by_desc(Column::CreatedAt)
            .offset(offset)
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = self.resolve_authors(post_models).await?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    /// Second hop: fetch usernames for the page of posts.
    async fn resolve_authors(
        &self,
        post_models: Vec<posts::Model>,
    ) -> Result<Vec<PostView>, PostQueryError> {
        if post_models.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<Uuid> = post_models.iter().map(|p| p.user_id).collect();

        let usernames: HashMap<Uuid, String> = users::Entity::find()
            .filter(users::Column::Id.is_in(author_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        // Authors are FK-guaranteed; a missing row means a concurrent
        // account deletion and the post is about to vanish anyway.
        Ok(post_models
            .into_iter()
            .filter_map(|p| {
                usernames.get(&p.user_id).map(|username| PostView {
                    id: p.id,
                    author_id: p.user_id,
                    author_username: username.clone(),
                    body: p.body,
                    created_at: p.created_at.with_timezone(&chrono::Utc),
                })
            })
            .collect())
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn timeline(
        &self,
        viewer: UserId,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, PostQueryError> {
        let viewer_uuid: Uuid = viewer.into();

        // Followed authors via subquery, own posts included
        let mut author_ids = follows::Entity::find()
            .filter(follows::Column::FollowerId.eq(viewer_uuid))
            .select_only()
            .column(follows::Column::FollowedId)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        author_ids.push(viewer_uuid);

        let query = Entity::find().filter(Column::UserId.is_in(author_ids));

        self.run_paged(query, page).await
    }

    async fn explore(&self, page: PageRequest) -> Result<PageResult<PostView>, PostQueryError> {
        self.run_paged(Entity::find(), page).await
    }

    async fn by_user(
        &self,
        author: UserId,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, PostQueryError> {
        let author_uuid: Uuid = author.into();

        let query = Entity::find().filter(Column::UserId.eq(author_uuid));

        self.run_paged(query, page).await
    }

    async fn count_by_user(&self, author: UserId) -> Result<u64, PostQueryError> {
        let author_uuid: Uuid = author.into();

        Entity::find()
            .filter(Column::UserId.eq(author_uuid))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn map_db_err(e: sea_orm::DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}
