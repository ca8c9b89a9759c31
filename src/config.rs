use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use log::warn;

const DEFAULT_REST_HOST: &str = "127.0.0.1";
const DEFAULT_REST_PORT: u16 = 8080;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadConfig {
    /// Subject proposed for the first message to a contact with no history.
    pub fallback_subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub log: LogConfig,
    pub rest: RestConfig,
    pub threads: ThreadConfig,
}

impl Settings {
    pub fn new(config_path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut config_builder = config::Config::builder()
            .set_default("log.level", "info")?
            .set_default("rest.host", DEFAULT_REST_HOST)?
            .set_default("rest.port", DEFAULT_REST_PORT)?
            .set_default("threads.fallback_subject", "")?;

        if let Some(path) = config_path {
            config_builder = config_builder.add_source(File::with_name(path));
        }

        // e.g. `PITCHER__REST__PORT=9000` overrides `rest.port`
        config_builder = config_builder.add_source(
            Environment::with_prefix("PITCHER")
                .prefix_separator("__")
                .separator("__")
                .ignore_empty(true),
        );

        // Short names kept for deployment scripts
        let env_vars = [
            ("REST_HOST", "rest.host"),
            ("REST_PORT", "rest.port"),
            ("LOG_LEVEL", "log.level"),
        ];

        for (env_var, config_path) in &env_vars {
            if let Ok(value) = env::var(env_var) {
                if *env_var == "REST_PORT" {
                    if let Ok(port) = value.parse::<u16>() {
                        config_builder = config_builder.set_override(config_path, port)?;
                    } else {
                        warn!("Invalid port value in {}: {}", env_var, value);
                    }
                } else {
                    config_builder = config_builder.set_override(config_path, value)?;
                }
            }
        }

        config_builder.build()?.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.rest.host, self.rest.port)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: "info".to_string() }
    }
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_REST_HOST.to_string(),
            port: DEFAULT_REST_PORT,
        }
    }
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self { fallback_subject: String::new() }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            rest: RestConfig::default(),
            threads: ThreadConfig::default(),
        }
    }
}
