use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualSearchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像ファイルではありません: {0}")]
    UnsupportedImage(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] visual_search_common::Error),
}

impl VisualSearchError {
    /// ユーザー向けアラート文言（検索失敗の場合のみ）
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            VisualSearchError::Common(e) if e.is_search_failure() => Some(e.alert_message()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VisualSearchError>;
