use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::logout_user::LogoutRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LogoutRequestDto {
    /// Refresh token to revoke; optional, logout succeeds without it
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    /// Confirmation message
    #[schema(example = "Logged out successfully")]
    pub message: String,
}

/// Log out
///
/// Revokes the supplied refresh token. Always succeeds from the caller's
/// perspective, even for tokens that are already invalid.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequestDto,
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    req: web::Json<LogoutRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.logout_user_use_case;

    let request = LogoutRequest::new(req.into_inner().refresh_token);

    match use_case.execute(request).await {
        Ok(response) => ApiResponse::success(LogoutResponseBody {
            message: response.message,
        }),

        Err(e) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}
