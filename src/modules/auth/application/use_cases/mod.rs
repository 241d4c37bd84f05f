pub mod delete_account;
pub mod fetch_profile;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod register_user;
pub mod request_password_reset;
pub mod reset_password;
pub mod update_profile;
