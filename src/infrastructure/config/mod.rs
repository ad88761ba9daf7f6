use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;

pub const DEFAULT_CONFIG_FILE: &str = "casegen.toml";
pub const CONFIG_FILE_ENV: &str = "CASEGEN_CONFIG";
const ENV_PREFIX: &str = "CASEGEN_";
const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub csv_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            openai_api_key: String::new(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            max_tokens: None,
            csv_path: PathBuf::from("testcases.csv"),
        }
    }
}

impl AppConfig {
    /// Loads defaults, then the TOML file, then `CASEGEN_*`, then `OPENAI_API_KEY`.
    pub fn load() -> Result<Self> {
        let file =
            std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_figment(Self::figment(&file))
    }

    pub fn figment(config_file: &str) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(&[API_KEY_ENV]))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: AppConfig = figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.openai_api_key.trim().is_empty() {
            return Err(AppError::ConfigError(format!(
                "{} is required",
                API_KEY_ENV
            )));
        }
        Ok(())
    }

    pub fn llm_config(&self) -> LLMConfig {
        LLMConfig {
            base_url: self.openai_base_url.clone(),
            model: self.model.clone(),
            api_key: Some(self.openai_api_key.clone()),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        }
    }
}
