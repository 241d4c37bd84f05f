use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::use_cases::delete_account::IDeleteAccountUseCase;
use crate::modules::auth::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::modules::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::auth::application::use_cases::logout_user::ILogoutUseCase;
use crate::modules::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
use crate::modules::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::auth::application::use_cases::request_password_reset::IRequestPasswordResetUseCase;
use crate::modules::auth::application::use_cases::reset_password::IResetPasswordUseCase;
use crate::modules::auth::application::use_cases::update_profile::IUpdateProfileUseCase;
use crate::modules::follow::application::use_cases::follow_user::IFollowUserUseCase;
use crate::modules::follow::application::use_cases::unfollow_user::IUnfollowUserUseCase;
use crate::modules::post::application::use_cases::create_post::ICreatePostUseCase;
use crate::modules::post::application::use_cases::get_explore::IGetExploreUseCase;
use crate::modules::post::application::use_cases::get_timeline::IGetTimelineUseCase;
use crate::modules::post::application::use_cases::get_user_posts::IGetUserPostsUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` whose slots default to happy-path stubs; tests
/// swap in targeted mocks with the `with_*` methods.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    delete_account: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    request_password_reset: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    reset_password: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    follow_user: Arc<dyn IFollowUserUseCase + Send + Sync>,
    unfollow_user: Arc<dyn IUnfollowUserUseCase + Send + Sync>,
    create_post: Arc<dyn ICreatePostUseCase + Send + Sync>,
    get_timeline: Arc<dyn IGetTimelineUseCase + Send + Sync>,
    get_explore: Arc<dyn IGetExploreUseCase + Send + Sync>,
    get_user_posts: Arc<dyn IGetUserPostsUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            delete_account: Arc::new(StubDeleteAccountUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            request_password_reset: Arc::new(StubRequestPasswordResetUseCase),
            reset_password: Arc::new(StubResetPasswordUseCase),
            follow_user: Arc::new(StubFollowUserUseCase),
            unfollow_user: Arc::new(StubUnfollowUserUseCase),
            create_post: Arc::new(StubCreatePostUseCase),
            get_timeline: Arc::new(StubGetTimelineUseCase),
            get_explore: Arc::new(StubGetExploreUseCase),
            get_user_posts: Arc::new(StubGetUserPostsUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: Arc<dyn IRegisterUserUseCase + Send + Sync>) -> Self {
        self.register_user = uc;
        self
    }

    pub fn with_login_user(mut self, uc: Arc<dyn ILoginUserUseCase + Send + Sync>) -> Self {
        self.login_user = uc;
        self
    }

    pub fn with_logout_user(mut self, uc: Arc<dyn ILogoutUseCase + Send + Sync>) -> Self {
        self.logout_user = uc;
        self
    }

    pub fn with_refresh_token(mut self, uc: Arc<dyn IRefreshTokenUseCase + Send + Sync>) -> Self {
        self.refresh_token = uc;
        self
    }

    pub fn with_delete_account(
        mut self,
        uc: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    ) -> Self {
        self.delete_account = uc;
        self
    }

    pub fn with_fetch_profile(mut self, uc: Arc<dyn IFetchProfileUseCase + Send + Sync>) -> Self {
        self.fetch_profile = uc;
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    ) -> Self {
        self.update_profile = uc;
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    ) -> Self {
        self.request_password_reset = uc;
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    ) -> Self {
        self.reset_password = uc;
        self
    }

    pub fn with_follow_user(mut self, uc: Arc<dyn IFollowUserUseCase + Send + Sync>) -> Self {
        self.follow_user = uc;
        self
    }

    pub fn with_unfollow_user(mut self, uc: Arc<dyn IUnfollowUserUseCase + Send + Sync>) -> Self {
        self.unfollow_user = uc;
        self
    }

    pub fn with_create_post(mut self, uc: Arc<dyn ICreatePostUseCase + Send + Sync>) -> Self {
        self.create_post = uc;
        self
    }

    pub fn with_get_timeline(mut self, uc: Arc<dyn IGetTimelineUseCase + Send + Sync>) -> Self {
        self.get_timeline = uc;
        self
    }

    pub fn with_get_explore(mut self, uc: Arc<dyn IGetExploreUseCase + Send + Sync>) -> Self {
        self.get_explore = uc;
        self
    }

    pub fn with_get_user_posts(
        mut self,
        uc: Arc<dyn IGetUserPostsUseCase + Send + Sync>,
    ) -> Self {
        self.get_user_posts = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            refresh_token_use_case: self.refresh_token,
            delete_account_use_case: self.delete_account,
            fetch_profile_use_case: self.fetch_profile,
            update_profile_use_case: self.update_profile,
            request_password_reset_use_case: self.request_password_reset,
            reset_password_use_case: self.reset_password,
            follow_user_use_case: self.follow_user,
            unfollow_user_use_case: self.unfollow_user,
            create_post_use_case: self.create_post,
            get_timeline_use_case: self.get_timeline,
            get_explore_use_case: self.get_explore,
            get_user_posts_use_case: self.get_user_posts,
        })
    }
}
