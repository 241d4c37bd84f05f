use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::post::application::use_cases::create_post::CreatePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreatePostRequestDto {
    /// Post text, 1 to 140 characters after trimming
    #[schema(example = "just setting up my microblog")]
    pub body: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreatedPostResponse {
    /// Post ID (UUID)
    pub id: String,

    /// Post text as stored
    pub body: String,

    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Create a post
///
/// Posts are immutable once created; there is no edit or delete endpoint.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    security(("BearerAuth" = [])),
    request_body = CreatePostRequestDto,
    responses(
        (
            status = 201,
            description = "Post created",
            body = inline(SuccessResponse<CreatedPostResponse>)
        ),
        (
            status = 400,
            description = "Empty or overlong body",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_POST_BODY",
                    "message": "A post must be at most 140 characters"
                }
            })
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePostRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.create_post_use_case;

    match use_case.execute(user.user_id, req.into_inner().body).await {
        Ok(post) => {
            info!(user_id = %user.user_id, post_id = %post.id, "Post created");

            ApiResponse::created(CreatedPostResponse {
                id: post.id.to_string(),
                body: post.body,
                created_at: post.created_at,
            })
        }

        Err(CreatePostError::InvalidBody(msg)) => {
            warn!(user_id = %user.user_id, "Invalid post body");
            ApiResponse::bad_request("INVALID_POST_BODY", &msg)
        }

        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Post creation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::post::application::domain::entities::Post;
    use crate::modules::post::application::use_cases::create_post::ICreatePostUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockCreateRejectsBody;

    #[async_trait]
    impl ICreatePostUseCase for MockCreateRejectsBody {
        async fn execute(&self, _user_id: Uuid, _body: String) -> Result<Post, CreatePostError> {
            Err(CreatePostError::InvalidBody(
                "A post must be at most 140 characters".to_string(),
            ))
        }
    }

    #[actix_web::test]
    async fn test_create_post_success() {
        let provider = test_token_provider();
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(provider.clone()))
                .service(create_post_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", bearer_for(&provider, Uuid::new_v4())))
            .set_json(serde_json::json!({ "body": "hello world" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["body"], "hello world");
        assert!(body["data"]["id"].is_string());
    }

    #[actix_web::test]
    async fn test_create_post_overlong_body_is_rejected() {
        let provider = test_token_provider();
        let app_state = TestAppStateBuilder::default()
            .with_create_post(Arc::new(MockCreateRejectsBody))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(provider.clone()))
                .service(create_post_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", bearer_for(&provider, Uuid::new_v4())))
            .set_json(serde_json::json!({ "body": "x".repeat(141) }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_POST_BODY");
    }

    #[actix_web::test]
    async fn test_create_post_requires_auth() {
        let provider = test_token_provider();
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(provider))
                .service(create_post_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({ "body": "hello" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
