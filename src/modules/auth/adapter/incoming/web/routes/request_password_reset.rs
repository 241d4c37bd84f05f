use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PasswordResetRequestDto {
    /// Account email address
    #[schema(example = "john@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct PasswordResetRequestedResponse {
    /// Always the same instruction, whether or not the address is known
    #[schema(example = "Check your email for the instructions to reset your password")]
    pub message: String,
}

/// Request a password-reset email
///
/// If the address belongs to an account, a reset link is emailed in the
/// background. The response does not reveal whether the address is known.
#[utoipa::path(
    post,
    path = "/api/auth/reset-password-request",
    tag = "auth",
    request_body = PasswordResetRequestDto,
    responses(
        (
            status = 200,
            description = "Request accepted",
            body = inline(SuccessResponse<PasswordResetRequestedResponse>)
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/reset-password-request")]
pub async fn request_password_reset_handler(
    req: web::Json<PasswordResetRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.request_password_reset_use_case;

    info!("Password reset requested");

    match use_case.execute(&req.email).await {
        Ok(output) => ApiResponse::success(PasswordResetRequestedResponse {
            message: output.message,
        }),

        Err(e) => {
            error!(error = %e, "Password reset request failed");
            ApiResponse::internal_error()
        }
    }
}
