use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;
use subtle::ConstantTimeEq;

use crate::middleware::session::{CurrentSession, SESSION_COOKIE};
use crate::models::auth::{AuthStatusResponse, LoginRequest};
use crate::AppState;

fn session_cookie(token: String, ttl_hours: i64) -> Cookie<'static> {
    // The admin frontend is served from a different origin, so the cookie
    // must be cross-site capable: SameSite=None requires Secure.
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(time::Duration::hours(ttl_hours))
        .build()
}

/// POST /api/login — check the shared admin password and open a session.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Option<Json<LoginRequest>>,
) -> impl IntoResponse {
    tracing::info!(handler = "login", "Handler: POST /api/login");

    let supplied = body
        .and_then(|Json(req)| req.password)
        .unwrap_or_default();

    // Constant-time comparison; an unset admin password refuses every login.
    let matches: bool = state
        .admin_password
        .as_bytes()
        .ct_eq(supplied.as_bytes())
        .into();

    if state.admin_password.is_empty() || !matches {
        tracing::warn!(handler = "login", status = 401, "Responding: incorrect password");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Incorrect password" })),
        )
            .into_response();
    }

    let token = state.sessions.create_admin().await;
    state.notifier.send("*Admin Login Success!*");

    tracing::info!(handler = "login", status = 200, "Responding: admin session created");

    (
        jar.add(session_cookie(token, state.session_ttl_hours)),
        Json(json!({ "success": true })),
    )
        .into_response()
}

/// POST /api/logout — unconditionally clear the caller's session.
pub async fn logout(
    State(state): State<AppState>,
    session: CurrentSession,
    jar: CookieJar,
) -> impl IntoResponse {
    tracing::info!(handler = "logout", "Handler: POST /api/logout");

    if let Some(token) = &session.token {
        state.sessions.revoke(token).await;
    }

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();

    tracing::info!(handler = "logout", status = 200, "Responding: session cleared");

    (jar.remove(removal), Json(json!({ "success": true })))
}

/// GET /api/check-auth — report whether the caller holds an admin session.
pub async fn check_auth(session: CurrentSession) -> impl IntoResponse {
    tracing::debug!(
        handler = "check_auth",
        authenticated = session.is_admin,
        "Handler: GET /api/check-auth"
    );

    Json(AuthStatusResponse {
        authenticated: session.is_admin,
    })
}
