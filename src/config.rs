use std::env;
use std::path::PathBuf;

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub admin_password: String,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub cors_origins: Vec<String>,
    pub max_payload_bytes: usize,
    pub session_ttl_hours: i64,
    pub seed_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:scripthub.db".to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_default(),
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok(),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:5000,http://127.0.0.1:5000".to_string()
                })
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_payload_bytes: env::var("MAX_PAYLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10 * 1024 * 1024), // data-URL images ride in JSON bodies
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
            seed_dir: env::var("SEED_DIR").map(PathBuf::from).unwrap_or_else(|_| {
                PathBuf::from(".")
            }),
        }
    }
}
