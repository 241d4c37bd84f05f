use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::follow::application::use_cases::unfollow_user::UnfollowUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct UnfollowResponse {
    /// Confirmation message
    #[schema(example = "You are no longer following susan")]
    pub message: String,
}

/// Unfollow a user
///
/// Idempotent: unfollowing someone you do not follow is a no-op.
#[utoipa::path(
    delete,
    path = "/api/users/{username}/follow",
    tag = "users",
    security(("BearerAuth" = [])),
    params(
        ("username" = String, Path, description = "User to unfollow")
    ),
    responses(
        (status = 200, description = "Unfollow recorded", body = inline(SuccessResponse<UnfollowResponse>)),
        (status = 400, description = "Cannot unfollow yourself", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/{username}/follow")]
pub async fn unfollow_user_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();
    let use_case = &data.unfollow_user_use_case;

    match use_case.execute(user.user_id, &username).await {
        Ok(output) => {
            info!(
                follower_id = %user.user_id,
                username = %output.username,
                was_following = output.was_following,
                "Unfollow request processed"
            );

            let message = if output.was_following {
                format!("You are no longer following {}", output.username)
            } else {
                format!("You were not following {}", output.username)
            };

            ApiResponse::success(UnfollowResponse { message })
        }

        Err(UnfollowUserError::CannotUnfollowSelf) => {
            ApiResponse::bad_request("CANNOT_UNFOLLOW_SELF", "You cannot unfollow yourself")
        }

        Err(UnfollowUserError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(username = %username, error = %e, "Unfollow failed");
            ApiResponse::internal_error()
        }
    }
}
