use crate::error::{Result, VisualSearchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use visual_search_common::{Backend, DEFAULT_BACKEND_URL};

/// バックエンドURLを上書きする環境変数
pub const BACKEND_ENV: &str = "VISUAL_SEARCH_BACKEND";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Noneならタイムアウトを設定しない（トランスポートの既定動作）
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VisualSearchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("visual-search").join("config.json"))
    }

    /// 使用するバックエンド
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn backend(&self, flag: Option<&str>) -> Result<Backend> {
        let env = std::env::var(BACKEND_ENV).ok();
        self.resolve_backend(flag, env.as_deref())
    }

    fn resolve_backend(&self, flag: Option<&str>, env: Option<&str>) -> Result<Backend> {
        let url = flag
            .or(env.filter(|v| !v.trim().is_empty()))
            .unwrap_or(self.backend_url.as_str());
        Ok(Backend::new(url)?)
    }

    pub fn set_backend_url(&mut self, url: String) -> Result<()> {
        // 保存前に検証
        Backend::new(&url)?;
        self.backend_url = url;
        Ok(())
    }

    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_seconds.map(std::time::Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://127.0.0.1:5000");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            backend_url: "https://matcher.example.com".to_string(),
            timeout_seconds: Some(30),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.timeout(), Some(std::time::Duration::from_secs(30)));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(loaded.timeout_seconds, Some(5));
    }

    #[test]
    fn test_backend_precedence() {
        let config = Config {
            backend_url: "http://from-file:5000".to_string(),
            timeout_seconds: None,
        };

        let from_flag = config
            .resolve_backend(Some("http://from-flag:5000/"), Some("http://from-env:5000"))
            .unwrap();
        assert_eq!(from_flag.base_url(), "http://from-flag:5000");

        let from_env = config.resolve_backend(None, Some("http://from-env:5000")).unwrap();
        assert_eq!(from_env.base_url(), "http://from-env:5000");

        let from_file = config.resolve_backend(None, Some("  ")).unwrap();
        assert_eq!(from_file.base_url(), "http://from-file:5000");
    }

    #[test]
    fn test_set_backend_url_rejects_empty() {
        let mut config = Config::default();
        assert!(config.set_backend_url("   ".to_string()).is_err());
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }
}
