use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::get_timeline::{FeedQueryParams, FeedResponse};

/// Explore feed
///
/// Every post on the site, newest first. Useful for finding people to
/// follow.
#[utoipa::path(
    get,
    path = "/api/explore",
    tag = "posts",
    security(("BearerAuth" = [])),
    params(FeedQueryParams),
    responses(
        (status = 200, description = "A page of all posts", body = inline(SuccessResponse<FeedResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/explore")]
pub async fn get_explore_handler(
    _user: AuthenticatedUser,
    query: web::Query<FeedQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.get_explore_use_case;

    match use_case.execute(query.page, query.per_page).await {
        Ok(result) => ApiResponse::success(FeedResponse::from(result)),

        Err(e) => {
            error!(error = %e, "Explore fetch failed");
            ApiResponse::internal_error()
        }
    }
}
