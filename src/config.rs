#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,

    /// Catalog backend: "file" or "memory"
    pub courses_backend: String,
    /// Path of the JSON catalog file (file backend only)
    pub courses_file: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            telegram_bot_token: std::env::var("TELEGRAM_BOT_TOKEN")?,
            courses_backend: std::env::var("COURSES_BACKEND")
                .unwrap_or_else(|_| "file".to_string()),
            courses_file: std::env::var("COURSES_FILE")
                .unwrap_or_else(|_| "cursos.json".to_string()),
        })
    }
}
