use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::use_cases::update_profile::{
    UpdateProfileError, UpdateProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequestDto {
    /// New username
    #[schema(example = "johndoe")]
    pub username: String,

    /// New bio (cleared when omitted or blank)
    pub about_me: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    /// Confirmation message
    #[schema(example = "Profile updated successfully")]
    pub message: String,

    pub user: UpdatedProfile,
}

#[derive(Serialize, ToSchema)]
pub struct UpdatedProfile {
    pub id: String,
    pub username: String,
    pub about_me: Option<String>,
}

fn map_update_error(err: UpdateProfileError) -> HttpResponse {
    match &err {
        UpdateProfileError::InvalidUsername(msg) => {
            warn!(error = %err, "Invalid profile input");
            ApiResponse::bad_request("INVALID_USERNAME", msg)
        }

        UpdateProfileError::InvalidAboutMe(msg) => {
            warn!(error = %err, "Invalid profile input");
            ApiResponse::bad_request("INVALID_ABOUT_ME", msg)
        }

        UpdateProfileError::UsernameTaken => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username already taken")
        }

        UpdateProfileError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        other => {
            error!(error = %other, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

/// Edit the authenticated user's profile
///
/// Changes username and bio. Username uniqueness is re-checked only when
/// it actually changes.
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequestDto,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<UpdateProfileResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/me")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.update_profile_use_case;
    let dto = req.into_inner();

    match use_case
        .execute(
            user.user_id,
            UpdateProfileInput {
                username: dto.username,
                about_me: dto.about_me,
            },
        )
        .await
    {
        Ok(output) => {
            info!(user_id = %output.user_id, username = %output.username, "Profile updated");

            ApiResponse::success(UpdateProfileResponse {
                message: "Profile updated successfully".to_string(),
                user: UpdatedProfile {
                    id: output.user_id.to_string(),
                    username: output.username,
                    about_me: output.about_me,
                },
            })
        }

        Err(e) => map_update_error(e),
    }
}
