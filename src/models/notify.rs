use serde::Deserialize;

/// Body of POST /api/notify/copy. Every field is optional; the handler
/// substitutes placeholders so the notification always goes out.
#[derive(Debug, Deserialize, Default)]
pub struct CopyNotice {
    pub title: Option<String>,
    pub key: Option<String>,
    pub time: Option<String>,
}
