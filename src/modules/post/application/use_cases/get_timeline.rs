use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::post_query::{
    PageRequest, PageResult, PostQuery, PostQueryError, PostView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTimelineError {
    #[error("Query error: {0}")]
    QueryError(#[from] PostQueryError),
}

#[async_trait]
pub trait IGetTimelineUseCase: Send + Sync {
    async fn execute(
        &self,
        viewer_id: Uuid,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PageResult<PostView>, GetTimelineError>;
}

pub struct GetTimelineUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
    default_per_page: u32,
}

impl<Q> GetTimelineUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q, default_per_page: u32) -> Self {
        Self {
            query,
            default_per_page,
        }
    }
}

#[async_trait]
impl<Q> IGetTimelineUseCase for GetTimelineUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        viewer_id: Uuid,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PageResult<PostView>, GetTimelineError> {
        let page = PageRequest::resolve(page, per_page, self.default_per_page);

        let result = self.query.timeline(UserId::new(viewer_id), page).await?;

        Ok(result)
    }
}
