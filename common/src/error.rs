//! エラー型定義
//!
//! 検索1回分の失敗は4種類（入力なし・通信失敗・サーバーエラー・レスポンス不正）。
//! ユーザーに見せるアラートは共通で、区別はログにのみ残す。

use thiserror::Error;

/// 入力が無いときのアラート文言
pub const MISSING_INPUT_ALERT: &str = "Please upload an image or enter a URL!";

/// 検索失敗時のアラート文言（失敗の種類によらず共通）
pub const FAILURE_ALERT: &str =
    "Error: Unable to connect to backend. Please check the log for details.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("画像ファイルまたは画像URLが指定されていません")]
    MissingInput,

    #[error("通信エラー: {0}")]
    Transport(String),

    #[error("サーバーエラー (status {status}){}", detail_suffix(.detail))]
    Server { status: u16, detail: Option<String> },

    #[error("レスポンスが不正です: {0}")]
    MalformedResponse(String),

    #[error("Config error: {0}")]
    Config(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

impl Error {
    /// ユーザー向けアラート文言
    pub fn alert_message(&self) -> &'static str {
        match self {
            Error::MissingInput => MISSING_INPUT_ALERT,
            _ => FAILURE_ALERT,
        }
    }

    /// 検索ワークフロー由来の失敗か（設定エラーではない）
    pub fn is_search_failure(&self) -> bool {
        matches!(
            self,
            Error::MissingInput
                | Error::Transport(_)
                | Error::Server { .. }
                | Error::MalformedResponse(_)
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
