use crate::error::{FlashcardError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// サーバーURLを上書きする環境変数
pub const SERVER_URL_ENV: &str = "FLASHCARD_SERVER_URL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".into(),
            output_file: flashcard_common::DOWNLOAD_FILE_NAME.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FlashcardError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("flashcard-gen").join("config.json"))
    }

    /// 接続先URL（環境変数を優先）
    pub fn server_url(&self) -> String {
        match std::env::var(SERVER_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => self.server_url.clone(),
        }
    }

    pub fn set_server_url(&mut self, url: String) -> Result<()> {
        let url = url.trim().to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FlashcardError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.server_url = url;
        self.save()
    }
}
