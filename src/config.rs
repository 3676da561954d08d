use crate::errors::{KarirError, KarirResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub typewriter_ms: u64,
    pub chats_path: String,
    pub log_spec: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
            max_output_tokens: 1000,
            temperature: 0.7,
            typewriter_ms: 15,
            chats_path: "career_chats.json".to_string(),
            log_spec: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> KarirResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| KarirError::config_error(format!("failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| KarirError::config_error(format!("failed to parse config: {}", e)))?;

        validate_config(&config)?;

        *CONFIG.write().unwrap() = config;
    } else {
        // Create default config, seeded with the API key from the environment
        let mut config = Config::default();

        if let Ok(key) = env::var("GEMINI_API_KEY") {
            config.api_key = key;
        }

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            KarirError::config_error(format!("failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| KarirError::config_error(format!("failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| KarirError::config_error(format!("failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn get_config_path() -> KarirResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| KarirError::config_error("could not determine home directory"))?;

    Ok(home_dir.join(".config").join("karir").join("config.json"))
}

fn validate_config(config: &Config) -> KarirResult<()> {
    if config.api_key.is_empty() {
        return Err(KarirError::config_error("API key is required"));
    }

    if config.model.is_empty() {
        return Err(KarirError::config_error("model name is required"));
    }

    if config.temperature < 0.0 || config.temperature > 1.0 {
        return Err(KarirError::config_error(
            "temperature must be between 0.0 and 1.0",
        ));
    }

    if config.max_output_tokens == 0 {
        return Err(KarirError::config_error(
            "max_output_tokens must be greater than 0",
        ));
    }

    if config.chats_path.is_empty() {
        return Err(KarirError::config_error("chats_path is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.api_key = "test-api-key".to_string();
        config
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_config_empty_api_key() {
        let mut config = valid_config();
        config.api_key = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_invalid_temperature() {
        let mut config = valid_config();
        config.temperature = 1.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_zero_output_tokens() {
        let mut config = valid_config();
        config.max_output_tokens = 0;
        assert!(validate_config(&config).is_err());
    }
}
