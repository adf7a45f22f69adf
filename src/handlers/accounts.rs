use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::doc_id::is_valid_doc_id;
use crate::error::AppError;
use crate::middleware::session::RequireAdmin;
use crate::models::account::AccountPayload;
use crate::AppState;

/// GET /api/accounts — admin only, unlike the public script listing:
/// profiles carry credentials and must never be exposed anonymously.
pub async fn list_accounts(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "list_accounts", "Handler: GET /api/accounts");

    let accounts = state.repo.list_accounts().await?;

    tracing::info!(
        handler = "list_accounts",
        count = accounts.len(),
        status = 200,
        "Responding: accounts listed"
    );

    Ok(Json(accounts))
}

/// POST /api/accounts — create a profile (admin only).
pub async fn create_account(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    body: Option<Json<AccountPayload>>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "create_account", "Handler: POST /api/accounts");

    let fields = body.map(|Json(b)| b).unwrap_or_default().into_fields()?;

    tracing::debug!(handler = "create_account", "Dispatching to repo.insert_account");
    let account = state.repo.insert_account(&fields).await?;
    tracing::debug!(
        handler = "create_account",
        account_id = %account.id,
        "Repo returned: account inserted"
    );

    // Name and username only — the password never leaves the API surface.
    state.notifier.send(format!(
        "*New Profile Added:*\n{} (@{})",
        account.name, account.username
    ));

    tracing::info!(
        handler = "create_account",
        account_id = %account.id,
        status = 201,
        "Responding: account created"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Profile added", "account": account })),
    ))
}

/// PUT /api/accounts/{id} — full replacement of the profile (admin only).
pub async fn update_account(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    body: Option<Json<AccountPayload>>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "update_account", account_id = %id, "Handler: PUT /api/accounts/{{id}}");

    let fields = body.map(|Json(b)| b).unwrap_or_default().into_fields()?;

    if !is_valid_doc_id(&id) {
        return Err(AppError::InvalidId("Invalid account ID format".into()));
    }

    tracing::debug!(handler = "update_account", "Dispatching to repo.replace_account");
    let matched = state.repo.replace_account(&id, &fields).await?;
    tracing::debug!(handler = "update_account", matched, "Repo returned");

    if !matched {
        return Err(AppError::NotFound("Account not found".into()));
    }

    state.notifier.send(format!(
        "*Profile Updated:*\n{} (@{})",
        fields.name, fields.username
    ));

    tracing::info!(
        handler = "update_account",
        account_id = %id,
        status = 200,
        "Responding: account updated"
    );

    Ok(Json(json!({ "message": "Profile updated" })))
}

/// DELETE /api/accounts/{id} — remove a profile (admin only).
pub async fn delete_account(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "delete_account", account_id = %id, "Handler: DELETE /api/accounts/{{id}}");

    if !is_valid_doc_id(&id) {
        return Err(AppError::InvalidId("Invalid account ID format".into()));
    }

    tracing::debug!(handler = "delete_account", "Dispatching to repo.delete_account");
    let deleted = state.repo.delete_account(&id).await?;
    tracing::debug!(handler = "delete_account", deleted, "Repo returned");

    if !deleted {
        return Err(AppError::NotFound("Account not found".into()));
    }

    state.notifier.send(format!("*Profile Deleted:*\nID: `{id}`"));

    tracing::info!(
        handler = "delete_account",
        account_id = %id,
        status = 200,
        "Responding: account deleted"
    );

    Ok(Json(json!({ "message": "Profile deleted" })))
}
