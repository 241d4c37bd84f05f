use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::outgoing::UserRepositoryError;
use crate::modules::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    /// Username (unique identifier)
    #[schema(example = "johndoe")]
    pub username: String,

    /// Email address
    #[schema(example = "john@example.com")]
    pub email: String,

    /// Password (minimum 8 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// Password confirmation, must match `password`
    #[schema(example = "SecurePass123!")]
    pub password_confirm: String,

    /// Optional free-text bio
    #[schema(example = "I write about databases")]
    pub about_me: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    /// Success message
    #[schema(example = "Registered successfully!")]
    message: String,

    /// Created user details
    user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Username
    #[schema(example = "johndoe")]
    username: String,

    /// Email address
    #[schema(example = "john@example.com")]
    email: String,

    /// Free-text bio
    about_me: Option<String>,
}

fn map_register_error(err: RegisterUserError, req: &RegisterRequestDto) -> HttpResponse {
    match &err {
        RegisterUserError::InvalidUsername(msg) => {
            warn!(username = %req.username, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_USERNAME", msg)
        }

        RegisterUserError::InvalidEmail(msg) => {
            warn!(username = %req.username, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_EMAIL", msg)
        }

        RegisterUserError::InvalidPassword(msg) => {
            warn!(username = %req.username, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_PASSWORD", msg)
        }

        RegisterUserError::InvalidAboutMe(msg) => {
            warn!(username = %req.username, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_ABOUT_ME", msg)
        }

        RegisterUserError::PasswordMismatch => {
            warn!(username = %req.username, "Password confirmation mismatch");
            ApiResponse::bad_request("PASSWORD_MISMATCH", "Passwords do not match")
        }

        RegisterUserError::UsernameTaken => {
            warn!(username = %req.username, "Username already taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Please use a different username")
        }

        RegisterUserError::EmailTaken => {
            warn!(email = %req.email, "Email already registered");
            ApiResponse::conflict("EMAIL_TAKEN", "Please use a different email")
        }

        // Unique-index race caught at the write
        RegisterUserError::RepositoryError(UserRepositoryError::UserAlreadyExists) => {
            warn!(username = %req.username, "User already exists");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }

        other => {
            error!(
                username = %req.username,
                email = %req.email,
                error = %other,
                "Unhandled registration error"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates a new account. Username and email must be unique; the password
/// must be confirmed.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (
            status = 201,
            description = "User created successfully",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Registered successfully!",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "johndoe",
                        "email": "john@example.com",
                        "about_me": null
                    }
                }
            })
        ),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Username or email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.register_user_use_case;

    info!(
        username = %req.username,
        email = %req.email,
        "User registration attempt"
    );

    let input = RegisterUserInput {
        username: req.username.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
        password_confirm: req.password_confirm.clone(),
        about_me: req.about_me.clone(),
    };

    match use_case.execute(input).await {
        Ok(user) => {
            info!(
                user_id = %user.user_id,
                username = %user.username,
                "User created successfully"
            );

            ApiResponse::created(RegisterUserResponse {
                message: "Registered successfully!".to_string(),
                user: RegisteredUser {
                    id: user.user_id.to_string(),
                    username: user.username,
                    email: user.email,
                    about_me: user.about_me,
                },
            })
        }

        Err(e) => map_register_error(e, &req),
    }
}
