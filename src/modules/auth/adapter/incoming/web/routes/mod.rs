pub mod delete_account;
pub mod fetch_profile;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod register_user;
pub mod request_password_reset;
pub mod reset_password;
pub mod update_profile;

pub use delete_account::{delete_account_handler, DeleteAccountResponse};
pub use fetch_profile::{fetch_profile_handler, ProfileResponse};
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo};
pub use logout_user::{logout_user_handler, LogoutRequestDto, LogoutResponseBody};
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto, RefreshTokenResponseBody};
pub use register_user::{
    register_user_handler, RegisterRequestDto, RegisterUserResponse, RegisteredUser,
};
pub use request_password_reset::{
    request_password_reset_handler, PasswordResetRequestDto, PasswordResetRequestedResponse,
};
pub use reset_password::{reset_password_handler, ResetPasswordRequestDto, ResetPasswordResponse};
pub use update_profile::{
    update_profile_handler, UpdateProfileRequestDto, UpdateProfileResponse, UpdatedProfile,
};
