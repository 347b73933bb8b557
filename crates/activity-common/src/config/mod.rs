//! Configuration structs

mod app_config;

pub use app_config::{
    ActivityConfig, AppConfig, AppSettings, ConfigError, CorsConfig, Environment, ServerConfig,
    MAX_RECENT_SESSIONS,
};
