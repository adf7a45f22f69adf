use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{self, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use axum::http::{header, Method};
use scripthub::config::Config;
use scripthub::middleware::session::SessionStore;
use scripthub::notify::Notifier;
use scripthub::repository::DocumentStore;
use scripthub::sqlite_repo::SqliteStore;
use scripthub::{build_app, db, seed, AppState};

fn build_cors(config: &Config) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    // The session cookie rides cross-site, so credentials must be allowed;
    // that rules out wildcard methods/headers.
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE]))
        .allow_credentials(true)
}

/// Background job: drop expired admin sessions.
async fn session_sweep_job(sessions: SessionStore) {
    let mut interval = tokio::time::interval(Duration::from_secs(60 * 60));

    loop {
        interval.tick().await;
        sessions.sweep().await;
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    if config.admin_password.is_empty() {
        tracing::warn!("ADMIN_PASSWORD not set, every login will be refused");
    }

    let pool = match db::init_pool(&config.database_url, config.db_max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize database, exiting");
            return;
        }
    };

    tracing::info!("Database initialized at {}", config.database_url);

    let repo: Arc<dyn DocumentStore> = Arc::new(SqliteStore::new(pool));

    seed::seed_if_empty(&repo, &config.seed_dir).await;

    let notifier = Notifier::spawn(
        config.telegram_bot_token.clone(),
        config.telegram_chat_id.clone(),
    );

    let sessions = SessionStore::new(Duration::from_secs(
        config.session_ttl_hours as u64 * 60 * 60,
    ));

    let cors = build_cors(&config);

    let state = AppState {
        repo,
        sessions: sessions.clone(),
        notifier,
        admin_password: config.admin_password.clone(),
        session_ttl_hours: config.session_ttl_hours,
    };

    let app = build_app(state)
        .layer(RequestBodyLimitLayer::new(config.max_payload_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_request(trace::DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    trace::DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(tower_http::LatencyUnit::Millis),
                ),
        )
        .layer(cors);

    // Spawn session expiry background job
    tokio::spawn(session_sweep_job(sessions));

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {addr}");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind {addr}, exiting");
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutting down...");
}
