use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Stand-in for a session-derived identity; every consumption row is
    /// attributed to this user until a real session layer lands.
    pub anonymous_user_id: i32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let anonymous_user_id = std::env::var("ANONYMOUS_USER_ID")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(1);
        Ok(Self {
            database_url,
            anonymous_user_id,
        })
    }
}
