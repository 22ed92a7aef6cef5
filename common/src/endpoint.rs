//! バックエンドのアドレス

use crate::error::{Error, Result};

/// 組み込みのバックエンドURL
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// 検索APIのパス
pub const SEARCH_PATH: &str = "/api/search";

/// バックエンドのベースURL（末尾スラッシュなし）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backend {
    base_url: String,
}

impl Backend {
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config("バックエンドURLが空です".into()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST` 先の検索API
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    /// 結果画像の相対パスを絶対URLにする（単純な連結）
    pub fn image_url(&self, relative_path: &str) -> String {
        format!("{}/{}", self.base_url, relative_path)
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend() {
        let backend = Backend::default();
        assert_eq!(backend.search_url(), "http://127.0.0.1:5000/api/search");
        assert_eq!(backend.image_url("p/1.jpg"), "http://127.0.0.1:5000/p/1.jpg");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let backend = Backend::new("https://search.example.com/ ").unwrap();
        assert_eq!(backend.base_url(), "https://search.example.com");
        assert_eq!(backend.search_url(), "https://search.example.com/api/search");
    }

    #[test]
    fn test_empty_backend_rejected() {
        assert!(matches!(Backend::new("  "), Err(Error::Config(_))));
        assert!(matches!(Backend::new("/"), Err(Error::Config(_))));
    }

    #[test]
    fn test_image_url_is_plain_join() {
        let backend = Backend::default();
        assert_eq!(
            backend.image_url("images/red shoe.jpg"),
            "http://127.0.0.1:5000/images/red shoe.jpg"
        );
    }
}
