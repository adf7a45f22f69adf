use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_ACCENT_COLOR: &str = "#0ea5e9";

/// Account profile as stored and returned over the wire.
/// The password travels in plaintext because the admin UI displays it;
/// notifications must never include it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "accentColor")]
    pub accent_color: String,
}

/// The writable fields of an account; also the fixture-file entry shape.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountFields {
    pub name: String,
    pub image: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "accentColor", default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    DEFAULT_ACCENT_COLOR.to_string()
}

/// Create/update request body with presence checked by hand so a missing
/// body or field maps to a 400 validation error.
#[derive(Debug, Deserialize, Default)]
pub struct AccountPayload {
    pub name: Option<String>,
    pub image: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "accentColor")]
    pub accent_color: Option<String>,
}

impl AccountPayload {
    pub fn into_fields(self) -> Result<AccountFields, AppError> {
        match (self.name, self.image, self.username, self.password) {
            (Some(name), Some(image), Some(username), Some(password))
                if !name.is_empty()
                    && !image.is_empty()
                    && !username.is_empty()
                    && !password.is_empty() =>
            {
                Ok(AccountFields {
                    name,
                    image,
                    username,
                    password,
                    accent_color: self
                        .accent_color
                        .filter(|c| !c.is_empty())
                        .unwrap_or_else(default_accent_color),
                })
            }
            _ => Err(AppError::Validation("Missing required fields".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> AccountPayload {
        AccountPayload {
            name: Some("Nhoy".into()),
            image: Some("http://x/a.png".into()),
            username: Some("nhoy".into()),
            password: Some("hunter2".into()),
            accent_color: None,
        }
    }

    #[test]
    fn test_accent_color_defaults() {
        let fields = full_payload().into_fields().unwrap();
        assert_eq!(fields.accent_color, DEFAULT_ACCENT_COLOR);
    }

    #[test]
    fn test_accent_color_preserved() {
        let mut payload = full_payload();
        payload.accent_color = Some("#ff0000".into());
        let fields = payload.into_fields().unwrap();
        assert_eq!(fields.accent_color, "#ff0000");
    }

    #[test]
    fn test_missing_password_rejected() {
        let mut payload = full_payload();
        payload.password = None;
        assert!(payload.into_fields().is_err());
    }

    #[test]
    fn test_fixture_entry_without_accent_color() {
        let fields: AccountFields = serde_json::from_str(
            r#"{"name":"N","image":"i","username":"u","password":"p"}"#,
        )
        .unwrap();
        assert_eq!(fields.accent_color, DEFAULT_ACCENT_COLOR);
    }
}
