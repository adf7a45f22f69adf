use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Script as stored and returned over the wire (Mongo-style `_id`).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Script {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub image: String,
    pub key: String,
}

/// The writable fields of a script; also the fixture-file entry shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptFields {
    pub title: String,
    pub image: String,
    pub key: String,
}

/// Create/update request body. Fields are optional at the serde level, and
/// handlers take the whole body as optional, so a missing body or field
/// yields our own 400, not the framework's rejection.
#[derive(Debug, Deserialize, Default)]
pub struct ScriptPayload {
    pub title: Option<String>,
    pub image: Option<String>,
    pub key: Option<String>,
}

impl ScriptPayload {
    pub fn into_fields(self) -> Result<ScriptFields, AppError> {
        match (self.title, self.image, self.key) {
            (Some(title), Some(image), Some(key))
                if !title.is_empty() && !image.is_empty() && !key.is_empty() =>
            {
                Ok(ScriptFields { title, image, key })
            }
            _ => Err(AppError::Validation("Missing required fields".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_with_all_fields() {
        let payload = ScriptPayload {
            title: Some("Aimbot".into()),
            image: Some("http://x/y.png".into()),
            key: Some("ABC123".into()),
        };
        let fields = payload.into_fields().unwrap();
        assert_eq!(fields.title, "Aimbot");
    }

    #[test]
    fn test_payload_missing_field_rejected() {
        let payload = ScriptPayload {
            title: Some("Aimbot".into()),
            image: None,
            key: Some("ABC123".into()),
        };
        assert!(payload.into_fields().is_err());
    }

    #[test]
    fn test_payload_empty_field_rejected() {
        let payload = ScriptPayload {
            title: Some("".into()),
            image: Some("http://x/y.png".into()),
            key: Some("ABC123".into()),
        };
        assert!(payload.into_fields().is_err());
    }
}
