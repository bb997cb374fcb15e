use config::{Config, ConfigError, Environment, File, Map};
use once_cell::sync::Lazy;
use serde::Deserialize;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("Failed to load config: {}", e)));

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    Development,
    Production,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub environment: RuntimeEnvironment,
    pub database_url: String,
    /// Base url the client layer sends its requests to.
    pub api_url: String,
    pub server: ServerConfig,
    pub trivia: TriviaConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TriviaConfig {
    pub api_url: String,
    pub questions_per_category: u8,
    pub request_delay_ms: u64,
    pub category_limit: Option<usize>,
}

impl AppConfig {
    /// Defaults, then `config/default.toml`, then `TRIVIA__*` env variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`AppConfig::load`], reading the `TRIVIA__*` layer from `vars` instead
    /// of the process environment when given.
    pub fn load_from(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("environment", "production")?
            .set_default("server.address", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("trivia.api_url", "https://opentdb.com")?
            .set_default("trivia.questions_per_category", 50)?
            .set_default("trivia.request_delay_ms", 5500)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("TRIVIA")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()
    }

    pub fn is_development(&self) -> bool {
        self.environment == RuntimeEnvironment::Development
    }
}
