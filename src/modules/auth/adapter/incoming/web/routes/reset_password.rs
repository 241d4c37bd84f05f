use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::reset_password::{
    ResetPasswordError, ResetPasswordInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ResetPasswordRequestDto {
    /// New password (minimum 8 characters)
    pub password: String,

    /// Confirmation, must match `password`
    pub password_confirm: String,
}

#[derive(Serialize, ToSchema)]
pub struct ResetPasswordResponse {
    /// Confirmation message
    #[schema(example = "Your password has been reset")]
    pub message: String,
}

/// Reset a password with an emailed token
///
/// The token comes from the reset email. Expired and malformed tokens are
/// rejected without distinguishing the two.
#[utoipa::path(
    post,
    path = "/api/auth/reset-password/{token}",
    tag = "auth",
    params(
        ("token" = String, Path, description = "Signed reset token from the email link")
    ),
    request_body = ResetPasswordRequestDto,
    responses(
        (status = 200, description = "Password updated", body = inline(SuccessResponse<ResetPasswordResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid or expired reset token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/reset-password/{token}")]
pub async fn reset_password_handler(
    path: web::Path<String>,
    req: web::Json<ResetPasswordRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.reset_password_use_case;
    let dto = req.into_inner();

    let input = ResetPasswordInput {
        token: path.into_inner(),
        password: dto.password,
        password_confirm: dto.password_confirm,
    };

    match use_case.execute(input).await {
        Ok(()) => ApiResponse::success(ResetPasswordResponse {
            message: "Your password has been reset".to_string(),
        }),

        Err(ResetPasswordError::InvalidToken) => {
            warn!("Password reset with invalid token");
            ApiResponse::unauthorized("INVALID_RESET_TOKEN", "Invalid or expired reset token")
        }

        Err(ResetPasswordError::InvalidPassword(msg)) => {
            ApiResponse::bad_request("INVALID_PASSWORD", &msg)
        }

        Err(ResetPasswordError::PasswordMismatch) => {
            ApiResponse::bad_request("PASSWORD_MISMATCH", "Passwords do not match")
        }

        Err(e) => {
            error!(error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::reset_password::IResetPasswordUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockResetFails {
        error: ResetPasswordError,
    }

    #[async_trait]
    impl IResetPasswordUseCase for MockResetFails {
        async fn execute(&self, _input: ResetPasswordInput) -> Result<(), ResetPasswordError> {
            Err(self.error.clone())
        }
    }

    #[actix_web::test]
    async fn test_reset_password_success() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(reset_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/reset-password/some-token")
            .set_json(serde_json::json!({
                "password": "brand_new_password",
                "password_confirm": "brand_new_password"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Your password has been reset");
    }

    #[actix_web::test]
    async fn test_reset_password_invalid_token() {
        let app_state = TestAppStateBuilder::default()
            .with_reset_password(Arc::new(MockResetFails {
                error: ResetPasswordError::InvalidToken,
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(reset_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/reset-password/expired-token")
            .set_json(serde_json::json!({
                "password": "brand_new_password",
                "password_confirm": "brand_new_password"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_RESET_TOKEN");
    }

    #[actix_web::test]
    async fn test_reset_password_mismatch() {
        let app_state = TestAppStateBuilder::default()
            .with_reset_password(Arc::new(MockResetFails {
                error: ResetPasswordError::PasswordMismatch,
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(reset_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/reset-password/some-token")
            .set_json(serde_json::json!({
                "password": "brand_new_password",
                "password_confirm": "different"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PASSWORD_MISMATCH");
    }
}
