use axum::{extract::Multipart, response::IntoResponse, Json};
use serde_json::json;

use crate::error::AppError;
use crate::middleware::session::RequireAdmin;
use crate::util::{data_url, mime_from_filename, sanitize_filename};

const UPLOAD_FIELD: &str = "image";

/// POST /api/upload-image — turn an uploaded image into a data URL.
///
/// Nothing is persisted; the caller stores the returned URL as the `image`
/// field of a script or profile. The MIME type is a filename-extension
/// heuristic, not content sniffing.
pub async fn upload_image(
    _admin: RequireAdmin,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(handler = "upload_image", "Handler: POST /api/upload-image");

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No selected file".into()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Internal(format!("Error processing image: {e}")))?;

        let mime = mime_from_filename(&filename);
        let image_url = data_url(&mime, &bytes);

        tracing::info!(
            handler = "upload_image",
            filename = %filename,
            mime = %mime,
            bytes = bytes.len(),
            status = 200,
            "Responding: image encoded"
        );

        return Ok(Json(json!({
            "success": true,
            "imageUrl": image_url,
            "filename": sanitize_filename(&filename),
        })));
    }

    Err(AppError::Validation("No image file provided".into()))
}
