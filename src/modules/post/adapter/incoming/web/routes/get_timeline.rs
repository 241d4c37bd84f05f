use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::post::application::ports::outgoing::post_query::{PageResult, PostView};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams)]
pub struct FeedQueryParams {
    /// 1-based page number
    pub page: Option<u32>,
    /// Page size (defaults to the configured POSTS_PER_PAGE, capped at 100)
    pub per_page: Option<u32>,
}

#[derive(Serialize, ToSchema)]
pub struct PostItem {
    /// Post ID (UUID)
    pub id: String,

    /// Author username
    #[schema(example = "johndoe")]
    pub author: String,

    /// Post text
    #[schema(example = "hello world")]
    pub body: String,

    /// Creation time
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct FeedResponse {
    pub items: Vec<PostItem>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl From<PageResult<PostView>> for FeedResponse {
    fn from(result: PageResult<PostView>) -> Self {
        let has_prev = result.has_prev();
        let has_next = result.has_next();

        Self {
            items: result
                .items
                .into_iter()
                .map(|p| PostItem {
                    id: p.id.to_string(),
                    author: p.author_username,
                    body: p.body,
                    created_at: p.created_at,
                })
                .collect(),
            page: result.page,
            per_page: result.per_page,
            total: result.total,
            has_prev,
            has_next,
        }
    }
}

/// Timeline feed
///
/// Posts by the users the viewer follows, plus the viewer's own posts,
/// newest first.
#[utoipa::path(
    get,
    path = "/api/timeline",
    tag = "posts",
    security(("BearerAuth" = [])),
    params(FeedQueryParams),
    responses(
        (status = 200, description = "A page of the timeline", body = inline(SuccessResponse<FeedResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/timeline")]
pub async fn get_timeline_handler(
    user: AuthenticatedUser,
    query: web::Query<FeedQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.get_timeline_use_case;

    match use_case
        .execute(user.user_id, query.page, query.per_page)
        .await
    {
        Ok(result) => ApiResponse::success(FeedResponse::from(result)),

        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Timeline fetch failed");
            ApiResponse::internal_error()
        }
    }
}
