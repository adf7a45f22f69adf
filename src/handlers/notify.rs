use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::models::notify::CopyNotice;
use crate::AppState;

/// POST /api/notify/copy — public; the frontend reports that a visitor
/// copied a script key. Always 200, notification is best-effort.
pub async fn notify_copy(
    State(state): State<AppState>,
    body: Option<Json<CopyNotice>>,
) -> impl IntoResponse {
    let notice = body.map(|Json(n)| n).unwrap_or_default();

    let title = notice.title.unwrap_or_else(|| "Unknown Script".to_string());
    let key = notice.key.unwrap_or_default();
    let time = notice.time.unwrap_or_else(|| "Unknown time".to_string());

    tracing::info!(handler = "notify_copy", title = %title, "Handler: POST /api/notify/copy");

    state.notifier.send(format!(
        "*Script Copied!*\n\n*Title:* `{title}`\n*Time:* `{time}`\n\n*Snippet:*\n`{key}`"
    ));

    Json(json!({ "success": true, "message": "Notification sent" }))
}
