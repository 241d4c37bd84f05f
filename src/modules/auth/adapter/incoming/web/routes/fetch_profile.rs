use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    /// User ID (UUID)
    pub id: String,

    /// Username
    #[schema(example = "johndoe")]
    pub username: String,

    /// Email address
    pub email: String,

    /// Free-text bio
    pub about_me: Option<String>,

    /// Last login time
    pub last_seen: Option<DateTime<Utc>>,

    /// Number of posts authored
    pub posts_count: u64,

    /// Number of followers
    pub followers_count: u64,

    /// Number of users this profile follows
    pub following_count: u64,

    /// Whether the requesting user follows this profile
    pub is_following: bool,
}

/// Fetch a user profile
///
/// Returns the profile of `username` together with its post and follower
/// counters, as seen by the authenticated viewer.
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = "users",
    security(("BearerAuth" = [])),
    params(
        ("username" = String, Path, description = "Profile username")
    ),
    responses(
        (status = 200, description = "Profile found", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/{username}")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();
    let use_case = &data.fetch_profile_use_case;

    match use_case.execute(&username, user.user_id).await {
        Ok(profile) => ApiResponse::success(ProfileResponse {
            id: profile.user_id.to_string(),
            username: profile.username,
            email: profile.email,
            about_me: profile.about_me,
            last_seen: profile.last_seen,
            posts_count: profile.posts_count,
            followers_count: profile.followers_count,
            following_count: profile.following_count,
            is_following: profile.is_following,
        }),

        Err(FetchProfileError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(username = %username, error = %e, "Profile fetch failed");
            ApiResponse::internal_error()
        }
    }
}
