use async_trait::async_trait;

use crate::modules::post::application::ports::outgoing::post_query::{
    PageRequest, PageResult, PostQuery, PostQueryError, PostView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExploreError {
    #[error("Query error: {0}")]
    QueryError(#[from] PostQueryError),
}

#[async_trait]
pub trait IGetExploreUseCase: Send + Sync {
    async fn execute(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PageResult<PostView>, GetExploreError>;
}

pub struct GetExploreUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
    default_per_page: u32,
}

impl<Q> GetExploreUseCase<Q>
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
impl<Q> IGetExploreUseCase for GetExploreUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PageResult<PostView>, GetExploreError> {
        let page = PageRequest::resolve(page, per_page, self.default_per_page);

        let result = self.query.explore(page).await?;

        Ok(result)
    }
}
