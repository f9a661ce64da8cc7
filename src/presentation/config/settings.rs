use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub groq: GroqSettings,
    pub cors: CorsSettings,
    pub rate_limit: RateLimitSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
}

#[derive(Debug, Clone)]
pub struct GroqSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    /// Fixed preamble prefixed onto every proxied completion message.
    pub pretext: String,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origin: String,
}

#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    pub max_requests: u32,
    pub window: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            server: ServerSettings {
                host: env_or("HOST", "0.0.0.0"),
                port: parse_or("PORT", 5000)?,
            },
            database: DatabaseSettings {
                url: require("DATABASE_URL")?,
                max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 5)?,
                run_migrations: parse_or("RUN_MIGRATIONS", true)?,
            },
            auth: AuthSettings {
                jwt_secret: require("AUTH_JWT_SECRET")?,
            },
            groq: GroqSettings {
                api_key: require("GROQ_API_KEY")?,
                model: env_or("GROQ_MODEL", "llama3-70b-8192"),
                base_url: std::env::var("GROQ_BASE_URL").ok(),
                pretext: std::env::var("GROQ_PRETEXT").unwrap_or_default(),
            },
            cors: CorsSettings {
                allowed_origin: env_or("CORS_ALLOWED_ORIGIN", "https://the-llm.vercel.app"),
            },
            rate_limit: RateLimitSettings {
                max_requests: parse_or("RATE_LIMIT_MAX_REQUESTS", 10)?,
                window: Duration::from_secs(parse_or("RATE_LIMIT_WINDOW_SECS", 3600)?),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn require(key: &'static str) -> Result<String, SettingsError> {
    std::env::var(key).map_err(|_| SettingsError::MissingVar(key))
}

fn parse_or<T>(key: &'static str, default: T) -> Result<T, SettingsError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| SettingsError::InvalidVar(key, e.to_string())),
        Err(_) => Ok(default),
    }
}
