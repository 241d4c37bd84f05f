use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::refresh_token::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    /// Refresh token issued at login
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    /// New JWT access token
    pub access_token: String,
}

/// Refresh the access token
///
/// Exchanges a valid, non-revoked refresh token for a fresh access token.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token issued", body = inline(SuccessResponse<RefreshTokenResponseBody>)),
        (status = 401, description = "Invalid, expired or revoked refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.refresh_token_use_case;

    match use_case.execute(&req.refresh_token).await {
        Ok(output) => ApiResponse::success(RefreshTokenResponseBody {
            access_token: output.access_token,
        }),

        Err(RefreshTokenError::InvalidToken) | Err(RefreshTokenError::TokenRevoked) => {
            warn!("Refresh rejected: invalid or revoked token");
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }

        Err(e) => {
            error!(error = %e, "Refresh failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::refresh_token::{
        IRefreshTokenUseCase, RefreshTokenOutput,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockRefreshFails {
        error: RefreshTokenError,
    }

    #[async_trait]
    impl IRefreshTokenUseCase for MockRefreshFails {
        async fn execute(
            &self,
            _refresh_token: &str,
        ) -> Result<RefreshTokenOutput, RefreshTokenError> {
            Err(self.error.clone())
        }
    }

    #[actix_web::test]
    async fn test_refresh_success() {
        let app_state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(app_state).service(refresh_token_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": "some.refresh.token" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["data"]["access_token"].is_string());
    }

    #[actix_web::test]
    async fn test_refresh_revoked_token_is_unauthorized() {
        let app_state = TestAppStateBuilder::default()
            .with_refresh_token(Arc::new(MockRefreshFails {
                error: RefreshTokenError::TokenRevoked,
            }))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(refresh_token_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": "revoked.token" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_REFRESH_TOKEN");
    }
}
