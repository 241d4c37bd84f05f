//! Happy-path stub use cases for handler tests.
//!
//! Every stub returns a plausible success value; tests override individual
//! slots on `TestAppStateBuilder` with purpose-built mocks to exercise
//! error paths.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::use_cases::delete_account::{
    DeleteAccountError, DeleteAccountOutput, IDeleteAccountUseCase,
};
use crate::modules::auth::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase, ProfileOutput,
};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginInput, LoginOutput,
};
use crate::modules::auth::application::use_cases::logout_user::{
    ILogoutUseCase, LogoutError, LogoutRequest, LogoutResponse,
};
use crate::modules::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenOutput,
};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
};
use crate::modules::auth::application::use_cases::request_password_reset::{
    IRequestPasswordResetUseCase, RequestPasswordResetError, RequestPasswordResetOutput,
    RESET_REQUESTED_MESSAGE,
};
use crate::modules::auth::application::use_cases::reset_password::{
    IResetPasswordUseCase, ResetPasswordError, ResetPasswordInput,
};
use crate::modules::auth::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError, UpdateProfileInput, UpdateProfileOutput,
};
use crate::modules::follow::application::use_cases::follow_user::{
    FollowUserError, FollowUserOutput, IFollowUserUseCase,
};
use crate::modules::follow::application::use_cases::unfollow_user::{
    IUnfollowUserUseCase, UnfollowUserError, UnfollowUserOutput,
};
use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::outgoing::post_query::{PageResult, PostView};
use crate::modules::post::application::use_cases::create_post::{
    CreatePostError, ICreatePostUseCase,
};
use crate::modules::post::application::use_cases::get_explore::{
    GetExploreError, IGetExploreUseCase,
};
use crate::modules::post::application::use_cases::get_timeline::{
    GetTimelineError, IGetTimelineUseCase,
};
use crate::modules::post::application::use_cases::get_user_posts::{
    GetUserPostsError, IGetUserPostsUseCase,
};

fn empty_page(page: Option<u32>, per_page: Option<u32>) -> PageResult<PostView> {
    PageResult {
        items: Vec::new(),
        page: page.unwrap_or(1),
        per_page: per_page.unwrap_or(25),
        total: 0,
    }
}

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        Ok(RegisterUserOutput {
            user_id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            about_me: input.about_me,
        })
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, LoginError> {
        Ok(LoginOutput {
            user_id: Uuid::new_v4(),
            email: format!("{}@example.com", input.username),
            username: input.username,
            access_token: "stub.access.token".to_string(),
            refresh_token: "stub.refresh.token".to_string(),
        })
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _refresh_token: &str,
    ) -> Result<RefreshTokenOutput, RefreshTokenError> {
        Ok(RefreshTokenOutput {
            access_token: "stub.access.token".to_string(),
        })
    }
}

pub struct StubDeleteAccountUseCase;

#[async_trait]
impl IDeleteAccountUseCase for StubDeleteAccountUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<DeleteAccountOutput, DeleteAccountError> {
        Ok(DeleteAccountOutput {
            username: "testuser".to_string(),
        })
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(
        &self,
        username: &str,
        _viewer_id: Uuid,
    ) -> Result<ProfileOutput, FetchProfileError> {
        Ok(ProfileOutput {
            user_id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            about_me: None,
            last_seen: Some(chrono::Utc::now()),
            posts_count: 0,
            followers_count: 0,
            following_count: 0,
            is_following: false,
        })
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<UpdateProfileOutput, UpdateProfileError> {
        Ok(UpdateProfileOutput {
            user_id,
            username: input.username,
            about_me: input.about_me,
        })
    }
}

pub struct StubRequestPasswordResetUseCase;

#[async_trait]
impl IRequestPasswordResetUseCase for StubRequestPasswordResetUseCase {
    async fn execute(
        &self,
        _email: &str,
    ) -> Result<RequestPasswordResetOutput, RequestPasswordResetError> {
        Ok(RequestPasswordResetOutput {
            message: RESET_REQUESTED_MESSAGE.to_string(),
        })
    }
}

pub struct StubResetPasswordUseCase;

#[async_trait]
impl IResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _input: ResetPasswordInput) -> Result<(), ResetPasswordError> {
        Ok(())
    }
}

pub struct StubFollowUserUseCase;

#[async_trait]
impl IFollowUserUseCase for StubFollowUserUseCase {
    async fn execute(
        &self,
        _follower_id: Uuid,
        username: &str,
    ) -> Result<FollowUserOutput, FollowUserError> {
        Ok(FollowUserOutput {
            username: username.to_string(),
            newly_followed: true,
        })
    }
}

pub struct StubUnfollowUserUseCase;

#[async_trait]
impl IUnfollowUserUseCase for StubUnfollowUserUseCase {
    async fn execute(
        &self,
        _follower_id: Uuid,
        username: &str,
    ) -> Result<UnfollowUserOutput, UnfollowUserError> {
        Ok(UnfollowUserOutput {
            username: username.to_string(),
            was_following: true,
        })
    }
}

pub struct StubCreatePostUseCase;

#[async_trait]
impl ICreatePostUseCase for StubCreatePostUseCase {
    async fn execute(&self, user_id: Uuid, body: String) -> Result<Post, CreatePostError> {
        Ok(Post {
            id: Uuid::new_v4(),
            user_id,
            body,
            created_at: chrono::Utc::now(),
        })
    }
}

pub struct StubGetTimelineUseCase;

#[async_trait]
impl IGetTimelineUseCase for StubGetTimelineUseCase {
    async fn execute(
        &self,
        _viewer_id: Uuid,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PageResult<PostView>, GetTimelineError> {
        Ok(empty_page(page, per_page))
    }
}

pub struct StubGetExploreUseCase;

#[async_trait]
impl IGetExploreUseCase for StubGetExploreUseCase {
    async fn execute(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PageResult<PostView>, GetExploreError> {
        Ok(empty_page(page, per_page))
    }
}

pub struct StubGetUserPostsUseCase;

#[async_trait]
impl IGetUserPostsUseCase for StubGetUserPostsUseCase {
    async fn execute(
        &self,
        _username: &str,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PageResult<PostView>, GetUserPostsError> {
        Ok(empty_page(page, per_page))
    }
}
