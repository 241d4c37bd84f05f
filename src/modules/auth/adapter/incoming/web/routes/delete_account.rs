use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::use_cases::delete_account::DeleteAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct DeleteAccountResponse {
    /// Confirmation message
    #[schema(example = "Successfully deleted account of johndoe")]
    pub message: String,
}

/// Delete the authenticated user's account
///
/// Hard-deletes the account; the user's posts and follow relationships go
/// with it.
#[utoipa::path(
    delete,
    path = "/api/auth/me",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Account deleted", body = inline(SuccessResponse<DeleteAccountResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/auth/me")]
pub async fn delete_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.delete_account_use_case;

    match use_case.execute(user.user_id).await {
        Ok(output) => {
            info!(user_id = %user.user_id, username = %output.username, "Account deleted");

            ApiResponse::success(DeleteAccountResponse {
                message: format!("Successfully deleted account of {}", output.username),
            })
        }

        Err(DeleteAccountError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}
