use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::post::application::use_cases::get_user_posts::GetUserPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::get_timeline::{FeedQueryParams, FeedResponse};

/// A user's posts
///
/// The posts shown on a profile page, newest first.
#[utoipa::path(
    get,
    path = "/api/users/{username}/posts",
    tag = "posts",
    security(("BearerAuth" = [])),
    params(
        ("username" = String, Path, description = "Author username"),
        FeedQueryParams
    ),
    responses(
        (status = 200, description = "A page of the user's posts", body = inline(SuccessResponse<FeedResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}/posts")]
pub async fn get_user_posts_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    query: web::Query<FeedQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();
    let use_case = &data.get_user_posts_use_case;

    match use_case
        .execute(&username, query.page, query.per_page)
        .await
    {
        Ok(result) => ApiResponse::success(FeedResponse::from(result)),

        Err(GetUserPostsError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(username = %username, error = %e, "User posts fetch failed");
            ApiResponse::internal_error()
        }
    }
}
