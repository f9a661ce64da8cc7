mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuthSettings, CorsSettings, DatabaseSettings, GroqSettings, RateLimitSettings, ServerSettings,
    Settings, SettingsError,
};
