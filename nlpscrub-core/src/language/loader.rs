//! Embedded language configurations
//!
//! Configurations are parsed once on first access and shared for the rest
//! of the process.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::LanguageConfig;
use crate::error::{ProcessingError, Result};

static LANGUAGE_CONFIGS: OnceLock<std::result::Result<HashMap<String, LanguageConfig>, String>> =
    OnceLock::new();

macro_rules! embed_language_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_configs() -> Result<HashMap<String, LanguageConfig>> {
    let mut configs = HashMap::new();

    let embedded_configs = [embed_language_config!(
        "en",
        "../../configs/languages/english.toml"
    )];

    for (code, toml_content) in embedded_configs {
        let config = LanguageConfig::from_toml_str(toml_content).map_err(|e| {
            ProcessingError::ResourceInit(format!("Failed to parse {code} config: {e}"))
        })?;

        // Validate that the config code matches
        if config.metadata.code != code {
            return Err(ProcessingError::ResourceInit(format!(
                "Config code mismatch: expected {}, got {}",
                code, config.metadata.code
            )));
        }

        configs.insert(code.to_string(), config);
    }

    Ok(configs)
}

fn embedded() -> Result<&'static HashMap<String, LanguageConfig>> {
    LANGUAGE_CONFIGS
        .get_or_init(|| load_embedded_configs().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| ProcessingError::ResourceInit(e.clone()))
}

/// Look up an embedded configuration by code (`en`) or name (`english`)
pub fn get_language_config(code: &str) -> Result<&'static LanguageConfig> {
    let configs = embedded()?;
    let key = code.to_lowercase();

    configs
        .get(&key)
        .or_else(|| configs.values().find(|c| c.metadata.name.to_lowercase() == key))
        .ok_or_else(|| ProcessingError::UnsupportedLanguage(code.to_string()))
}

/// Codes of all embedded languages
pub fn list_available_languages() -> Result<Vec<&'static str>> {
    let mut codes: Vec<&'static str> = embedded()?.keys().map(|s| s.as_str()).collect();
    codes.sort_unstable();
    Ok(codes)
}
