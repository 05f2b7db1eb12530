mod types;

pub use types::*;

use crate::Result;
use std::env;
use std::io::ErrorKind;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(contents) => {
            debug!("Loading configuration from: {}", config_path);
            serde_yaml::from_str(&contents)?
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
        Err(e) => return Err(e.into()),
    };

    // Provider credentials come from the process environment and override
    // anything the file carries.
    if let Ok(key) = env::var("OCR_API_KEY") {
        config.ocr.api_key = key;
    }
    if let Ok(key) = env::var("CHATGPT_API_KEY") {
        config.llm.api_key = key;
    }

    Ok(config)
}
