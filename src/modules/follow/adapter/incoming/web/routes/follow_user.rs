use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::follow::application::use_cases::follow_user::FollowUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct FollowResponse {
    /// Confirmation message
    #[schema(example = "You are now following susan")]
    pub message: String,
}

/// Follow a user
///
/// Idempotent: following someone twice is a no-op. Following yourself is
/// rejected.
#[utoipa::path(
    post,
    path = "/api/users/{username}/follow",
    tag = "users",
    security(("BearerAuth" = [])),
    params(
        ("username" = String, Path, description = "User to follow")
    ),
    responses(
        (status = 200, description = "Follow recorded", body = inline(SuccessResponse<FollowResponse>)),
        (status = 400, description = "Cannot follow yourself", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/{username}/follow")]
pub async fn follow_user_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();
    let use_case = &data.follow_user_use_case;

    match use_case.execute(user.user_id, &username).await {
        Ok(output) => {
            info!(
                follower_id = %user.user_id,
                username = %output.username,
                newly_followed = output.newly_followed,
                "Follow request processed"
            );

            let message = if output.newly_followed {
                format!("You are now following {}", output.username)
            } else {
                format!("You are already following {}", output.username)
            };

            ApiResponse::success(FollowResponse { message })
        }

        Err(FollowUserError::CannotFollowSelf) => {
            warn!(user_id = %user.user_id, "Attempted self-follow");
            ApiResponse::bad_request("CANNOT_FOLLOW_SELF", "You cannot follow yourself")
        }

        Err(FollowUserError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(username = %username, error = %e, "Follow failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::follow::application::use_cases::follow_user::{
        FollowUserOutput, IFollowUserUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockFollowFails {
        error: FollowUserError,
    }

    #[async_trait]
    impl IFollowUserUseCase for MockFollowFails {
        async fn execute(
            &self,
            _follower_id: Uuid,
            _username: &str,
        ) -> Result<FollowUserOutput, FollowUserError> {
            Err(self.error.clone())
        }
    }

    #[actix_web::test]
    async fn test_follow_user_success() {
        let provider = test_token_provider();
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(provider.clone()))
                .service(follow_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/susan/follow")
            .insert_header(("Authorization", bearer_for(&provider, Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "You are now following susan");
    }

    #[actix_web::test]
    async fn test_follow_self_is_bad_request() {
        let provider = test_token_provider();
        let app_state = TestAppStateBuilder::default()
            .with_follow_user(Arc::new(MockFollowFails {
                error: FollowUserError::CannotFollowSelf,
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(provider.clone()))
                .service(follow_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/me_again/follow")
            .insert_header(("Authorization", bearer_for(&provider, Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "CANNOT_FOLLOW_SELF");
    }

    #[actix_web::test]
    async fn test_follow_unknown_user_is_not_found() {
        let provider = test_token_provider();
        let app_state = TestAppStateBuilder::default()
            .with_follow_user(Arc::new(MockFollowFails {
                error: FollowUserError::UserNotFound("ghost".to_string()),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(provider.clone()))
                .service(follow_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/ghost/follow")
            .insert_header(("Authorization", bearer_for(&provider, Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_follow_requires_auth() {
        let provider = test_token_provider();
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(provider))
                .service(follow_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/susan/follow")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
