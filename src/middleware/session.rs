use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use rand::Rng;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::AppState;

pub const SESSION_COOKIE: &str = "sid";

struct SessionRecord {
    is_admin: bool,
    created_at: Instant,
}

/// In-process session store keyed by a random token carried in the `sid`
/// cookie. A session holds a single flag: whether the caller logged in as
/// admin. Absolute lifetime from creation; expired records are dropped
/// lazily on lookup and by the periodic sweep.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionRecord>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Create an admin session and return its token.
    pub async fn create_admin(&self) -> String {
        let bytes: [u8; 32] = rand::thread_rng().gen();
        let token = hex::encode(bytes);

        let mut sessions = self.sessions.lock().await;
        sessions.insert(
            token.clone(),
            SessionRecord {
                is_admin: true,
                created_at: Instant::now(),
            },
        );
        token
    }

    pub async fn is_admin(&self, token: &str) -> bool {
        let mut sessions = self.sessions.lock().await;
        match sessions.get(token) {
            Some(record) if record.created_at.elapsed() < self.ttl => record.is_admin,
            Some(_) => {
                sessions.remove(token);
                false
            }
            None => false,
        }
    }

    pub async fn revoke(&self, token: &str) {
        self.sessions.lock().await.remove(token);
    }

    /// Drop expired sessions. Called by a background task.
    pub async fn sweep(&self) {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, record| record.created_at.elapsed() < self.ttl);
        let dropped = before - sessions.len();
        if dropped > 0 {
            tracing::debug!(dropped, "Session sweep: expired sessions removed");
        }
    }
}

fn session_token(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// The caller's resolved identity, threaded into handlers as an extractor.
/// Always succeeds; anonymous callers get `is_admin = false`.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub token: Option<String>,
    pub is_admin: bool,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(parts);
        let is_admin = match &token {
            Some(token) => state.sessions.is_admin(token).await,
            None => false,
        };
        Ok(CurrentSession { token, is_admin })
    }
}

/// Admin gate: rejects with 401 unless the request carries a live admin
/// session. Handlers for mutating routes take this as a parameter.
pub struct RequireAdmin;

#[axum::async_trait]
impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admitted = match session_token(parts) {
            Some(token) => state.sessions.is_admin(&token).await,
            None => false,
        };

        if admitted {
            Ok(RequireAdmin)
        } else {
            tracing::warn!(
                uri = %parts.uri.path(),
                "Auth: rejected — no admin session"
            );
            Err(AppError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_created_session_is_admin() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.create_admin().await;
        assert!(store.is_admin(&token).await);
        assert!(!store.is_admin("unknown-token").await);
    }

    #[tokio::test]
    async fn test_revoked_session_is_anonymous() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.create_admin().await;
        store.revoke(&token).await;
        assert!(!store.is_admin(&token).await);
    }

    #[tokio::test]
    async fn test_expired_session_is_anonymous() {
        let store = SessionStore::new(Duration::ZERO);
        let token = store.create_admin().await;
        assert!(!store.is_admin(&token).await);
    }

    #[tokio::test]
    async fn test_sweep_removes_expired() {
        let store = SessionStore::new(Duration::ZERO);
        store.create_admin().await;
        store.sweep().await;
        assert!(store.sessions.lock().await.is_empty());
    }
}
