pub mod config;
pub mod db;
pub mod doc_id;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod notify;
pub mod repository;
pub mod seed;
pub mod sqlite_repo;
pub mod util;

use axum::{
    routing::{get, post, put},
    Router,
};
use middleware::session::SessionStore;
use notify::Notifier;
use repository::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn DocumentStore>,
    pub sessions: SessionStore,
    pub notifier: Notifier,
    pub admin_password: String,
    pub session_ttl_hours: i64,
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout))
        .route("/api/check-auth", get(handlers::auth::check_auth))
}

fn script_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/scripts",
            get(handlers::scripts::list_scripts).post(handlers::scripts::create_script),
        )
        .route(
            "/api/scripts/:id",
            put(handlers::scripts::update_script).delete(handlers::scripts::delete_script),
        )
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/accounts",
            get(handlers::accounts::list_accounts).post(handlers::accounts::create_account),
        )
        .route(
            "/api/accounts/:id",
            put(handlers::accounts::update_account).delete(handlers::accounts::delete_account),
        )
}

fn misc_routes() -> Router<AppState> {
    Router::new()
        .route("/api/upload-image", post(handlers::upload::upload_image))
        .route("/api/notify/copy", post(handlers::notify::notify_copy))
        .route("/health", get(handlers::health::health_check))
}

/// Build the full application router (used by main and tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(script_routes())
        .merge(account_routes())
        .merge(misc_routes())
        .with_state(state)
}
