pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::email;
pub use modules::follow;
pub use modules::post;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    delete_account::{DeleteAccountUseCase, IDeleteAccountUseCase},
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    request_password_reset::{IRequestPasswordResetUseCase, RequestPasswordResetUseCase},
    reset_password::{IResetPasswordUseCase, ResetPasswordUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};

use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::PasswordResetNotifier;
use crate::email::application::services::{EmailService, PasswordResetEmailService};

use crate::follow::adapter::outgoing::follow_query_postgres::FollowQueryPostgres;
use crate::follow::adapter::outgoing::follow_repository_postgres::FollowRepositoryPostgres;
use crate::follow::application::use_cases::{
    follow_user::{FollowUserUseCase, IFollowUserUseCase},
    unfollow_user::{IUnfollowUserUseCase, UnfollowUserUseCase},
};

use crate::post::adapter::outgoing::post_query_postgres::PostQueryPostgres;
use crate::post::adapter::outgoing::post_repository_postgres::PostRepositoryPostgres;
use crate::post::application::use_cases::{
    create_post::{CreatePostUseCase, ICreatePostUseCase},
    get_explore::{GetExploreUseCase, IGetExploreUseCase},
    get_timeline::{GetTimelineUseCase, IGetTimelineUseCase},
    get_user_posts::{GetUserPostsUseCase, IGetUserPostsUseCase},
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub delete_account_use_case: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub request_password_reset_use_case: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    pub reset_password_use_case: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub follow_user_use_case: Arc<dyn IFollowUserUseCase + Send + Sync>,
    pub unfollow_user_use_case: Arc<dyn IUnfollowUserUseCase + Send + Sync>,
    pub create_post_use_case: Arc<dyn ICreatePostUseCase + Send + Sync>,
    pub get_timeline_use_case: Arc<dyn IGetTimelineUseCase + Send + Sync>,
    pub get_explore_use_case: Arc<dyn IGetExploreUseCase + Send + Sync>,
    pub get_user_posts_use_case: Arc<dyn IGetUserPostsUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let posts_per_page: u32 = env::var("POSTS_PER_PAGE")
        .unwrap_or_else(|_| "25".to_string())
        .parse()
        .expect("Invalid POSTS_PER_PAGE");

    // MAIL SETUP
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let mail_server = env::var("MAIL_SERVER").expect("MAIL_SERVER not set");
    let smtp_sender = if env::var("MAIL_USE_TLS").is_ok() {
        // Authenticated TLS relay
        let mail_username = env::var("MAIL_USERNAME").expect("MAIL_USERNAME not set");
        let mail_password = env::var("MAIL_PASSWORD").expect("MAIL_PASSWORD not set");

        SmtpEmailSender::new(&mail_server, &mail_username, &mail_password, &from_email)
            .expect("Failed to build SMTP transport")
    } else {
        // Plain transport (local Mailpit/MailHog or an open relay)
        let mail_port: u16 = env::var("MAIL_PORT")
            .unwrap_or_else(|_| "25".to_string())
            .parse()
            .expect("Invalid MAIL_PORT");

        SmtpEmailSender::new_local(&mail_server, mail_port, &from_email)
    };

    let server_url = format!("{host}:{port}");
    let app_url = env::var("APP_URL").unwrap_or_else(|_| format!("http://{server_url}"));
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let follow_repo = FollowRepositoryPostgres::new(Arc::clone(&db_arc));
    let follow_query = FollowQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let redis_token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let jwt_arc: Arc<JwtTokenService> = Arc::new(jwt_service.clone());
    let argon2_password_hasher = Arc::new(Argon2Hasher::from_env());

    // Email services
    let email_service = EmailService::new(Arc::new(smtp_sender));
    let reset_notifier: Arc<dyn PasswordResetNotifier> = Arc::new(PasswordResetEmailService::new(
        email_service,
        app_url.clone(),
    ));

    // Auth use cases
    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        argon2_password_hasher.clone(),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        argon2_password_hasher.clone(),
        jwt_arc.clone(),
    );
    let logout_user_use_case = LogoutUseCase::new(redis_token_repo.clone(), jwt_arc.clone());
    let refresh_token_use_case =
        RefreshTokenUseCase::new(redis_token_repo.clone(), jwt_arc.clone());
    let delete_account_use_case = DeleteAccountUseCase::new(user_query.clone(), user_repo.clone());
    let fetch_profile_use_case = FetchProfileUseCase::new(
        user_query.clone(),
        follow_query.clone(),
        post_query.clone(),
    );
    let update_profile_use_case = UpdateProfileUseCase::new(user_query.clone(), user_repo.clone());
    let request_password_reset_use_case = RequestPasswordResetUseCase::new(
        user_query.clone(),
        jwt_arc.clone(),
        reset_notifier,
    );
    let reset_password_use_case = ResetPasswordUseCase::new(
        user_repo.clone(),
        argon2_password_hasher.clone(),
        jwt_arc.clone(),
    );

    // Follow use cases
    let follow_user_use_case = FollowUserUseCase::new(user_query.clone(), follow_repo.clone());
    let unfollow_user_use_case = UnfollowUserUseCase::new(user_query.clone(), follow_repo);

    // Post use cases
    let create_post_use_case = CreatePostUseCase::new(post_repo);
    let get_timeline_use_case = GetTimelineUseCase::new(post_query.clone(), posts_per_page);
    let get_explore_use_case = GetExploreUseCase::new(post_query.clone(), posts_per_page);
    let get_user_posts_use_case =
        GetUserPostsUseCase::new(user_query, post_query, posts_per_page);

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        delete_account_use_case: Arc::new(delete_account_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        request_password_reset_use_case: Arc::new(request_password_reset_use_case),
        reset_password_use_case: Arc::new(reset_password_use_case),
        follow_user_use_case: Arc::new(follow_user_use_case),
        unfollow_user_use_case: Arc::new(unfollow_user_use_case),
        create_post_use_case: Arc::new(create_post_use_case),
        get_timeline_use_case: Arc::new(get_timeline_use_case),
        get_explore_use_case: Arc::new(get_explore_use_case),
        get_user_posts_use_case: Arc::new(get_user_posts_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(shared::api::json_config::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::request_password_reset_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::follow::adapter::incoming::web::routes::follow_user_handler);
    cfg.service(crate::follow::adapter::incoming::web::routes::unfollow_user_handler);
    // Posts
    cfg.service(crate::post::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_timeline_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_explore_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_user_posts_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
