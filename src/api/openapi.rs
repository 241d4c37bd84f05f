use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::modules::auth::adapter::incoming::web::routes::{
    DeleteAccountResponse, LoginRequestDto, LoginResponse, LoginUserInfo, LogoutRequestDto,
    LogoutResponseBody, PasswordResetRequestDto, PasswordResetRequestedResponse, ProfileResponse,
    RefreshTokenRequestDto, RefreshTokenResponseBody, RegisterRequestDto, RegisterUserResponse,
    RegisteredUser, ResetPasswordRequestDto, ResetPasswordResponse, UpdateProfileRequestDto,
    UpdateProfileResponse, UpdatedProfile,
};

// Follow
use crate::modules::follow::adapter::incoming::web::routes::{FollowResponse, UnfollowResponse};

// Posts
use crate::modules::post::adapter::incoming::web::routes::{
    CreatePostRequestDto, CreatedPostResponse, FeedResponse, PostItem,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Microblog API",
        version = "1.0.0",
        description = "JSON API for a small social microblog: accounts, profiles, follows, posts and feeds",
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_user::logout_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::modules::auth::adapter::incoming::web::routes::delete_account::delete_account_handler,
        crate::modules::auth::adapter::incoming::web::routes::request_password_reset::request_password_reset_handler,
        crate::modules::auth::adapter::incoming::web::routes::reset_password::reset_password_handler,

        // User endpoints
        crate::modules::auth::adapter::incoming::web::routes::fetch_profile::fetch_profile_handler,
        crate::modules::auth::adapter::incoming::web::routes::update_profile::update_profile_handler,
        crate::modules::follow::adapter::incoming::web::routes::follow_user::follow_user_handler,
        crate::modules::follow::adapter::incoming::web::routes::unfollow_user::unfollow_user_handler,

        // Post endpoints
        crate::modules::post::adapter::incoming::web::routes::create_post::create_post_handler,
        crate::modules::post::adapter::incoming::web::routes::get_timeline::get_timeline_handler,
        crate::modules::post::adapter::incoming::web::routes::get_explore::get_explore_handler,
        crate::modules::post::adapter::incoming::web::routes::get_user_posts::get_user_posts_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterUserResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequestDto,
            RegisterUserResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            LogoutRequestDto,
            LogoutResponseBody,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,
            DeleteAccountResponse,
            PasswordResetRequestDto,
            PasswordResetRequestedResponse,
            ResetPasswordRequestDto,
            ResetPasswordResponse,

            // User DTOs
            ProfileResponse,
            UpdateProfileRequestDto,
            UpdateProfileResponse,
            UpdatedProfile,
            FollowResponse,
            UnfollowResponse,

            // Post DTOs
            CreatePostRequestDto,
            CreatedPostResponse,
            FeedResponse,
            PostItem
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication and account endpoints"),
        (name = "users", description = "Profiles and follow relationships"),
        (name = "posts", description = "Posts and feeds"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
