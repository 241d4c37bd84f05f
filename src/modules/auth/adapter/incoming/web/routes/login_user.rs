use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_user::{LoginError, LoginInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Username
    #[schema(example = "johndoe")]
    pub username: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token (short-lived)
    access_token: String,

    /// JWT refresh token (long-lived)
    refresh_token: String,

    /// Authenticated user information
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Username
    #[schema(example = "johndoe")]
    username: String,

    /// Email address
    #[schema(example = "john@example.com")]
    email: String,
}

/// User login
///
/// Authenticates a user with username and password, returns JWT access and
/// refresh tokens and stamps the account's last-seen time.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>)
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Incorrect username or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_user_use_case;
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let result = use_case
        .execute(LoginInput {
            username: dto.username.clone(),
            password: dto.password,
        })
        .await;

    match result {
        Ok(output) => {
            info!(user_id = %output.user_id, "Login successful");

            ApiResponse::success(LoginResponse {
                access_token: output.access_token,
                refresh_token: output.refresh_token,
                user: LoginUserInfo {
                    id: output.user_id.to_string(),
                    username: output.username,
                    email: output.email,
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!(username = %dto.username, "Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Incorrect username or password")
        }

        Err(e) => {
            error!(username = %dto.username, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
