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
use crate::models::script::ScriptPayload;
use crate::AppState;

/// GET /api/scripts — public listing, no session required.
pub async fn list_scripts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "list_scripts", "Handler: GET /api/scripts");

    let scripts = state.repo.list_scripts().await?;

    tracing::info!(
        handler = "list_scripts",
        count = scripts.len(),
        status = 200,
        "Responding: scripts listed"
    );

    Ok(Json(scripts))
}

/// POST /api/scripts — create a script (admin only).
pub async fn create_script(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    body: Option<Json<ScriptPayload>>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "create_script", "Handler: POST /api/scripts");

    let fields = body.map(|Json(b)| b).unwrap_or_default().into_fields()?;

    tracing::debug!(handler = "create_script", "Dispatching to repo.insert_script");
    let script = state.repo.insert_script(&fields).await?;
    tracing::debug!(handler = "create_script", script_id = %script.id, "Repo returned: script inserted");

    state
        .notifier
        .send(format!("*New Script Added:*\n`{}`", script.title));

    tracing::info!(
        handler = "create_script",
        script_id = %script.id,
        status = 201,
        "Responding: script created"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Script added", "script": script })),
    ))
}

/// PUT /api/scripts/{id} — full replacement of the three fields (admin only).
pub async fn update_script(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    body: Option<Json<ScriptPayload>>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "update_script", script_id = %id, "Handler: PUT /api/scripts/{{id}}");

    let fields = body.map(|Json(b)| b).unwrap_or_default().into_fields()?;

    if !is_valid_doc_id(&id) {
        return Err(AppError::InvalidId("Invalid script ID format".into()));
    }

    tracing::debug!(handler = "update_script", "Dispatching to repo.replace_script");
    let matched = state.repo.replace_script(&id, &fields).await?;
    tracing::debug!(handler = "update_script", matched, "Repo returned");

    if !matched {
        return Err(AppError::NotFound("Script not found".into()));
    }

    state
        .notifier
        .send(format!("*Script Updated:*\nID: `{id}`\nTitle: `{}`", fields.title));

    tracing::info!(
        handler = "update_script",
        script_id = %id,
        status = 200,
        "Responding: script updated"
    );

    Ok(Json(json!({ "message": "Script updated" })))
}

/// DELETE /api/scripts/{id} — remove a script (admin only).
pub async fn delete_script(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "delete_script", script_id = %id, "Handler: DELETE /api/scripts/{{id}}");

    if !is_valid_doc_id(&id) {
        return Err(AppError::InvalidId("Invalid script ID format".into()));
    }

    tracing::debug!(handler = "delete_script", "Dispatching to repo.delete_script");
    let deleted = state.repo.delete_script(&id).await?;
    tracing::debug!(handler = "delete_script", deleted, "Repo returned");

    if !deleted {
        return Err(AppError::NotFound("Script not found".into()));
    }

    state.notifier.send(format!("*Script Deleted:*\nID: `{id}`"));

    tracing::info!(
        handler = "delete_script",
        script_id = %id,
        status = 200,
        "Responding: script deleted"
    );

    Ok(Json(json!({ "message": "Script deleted" })))
}
