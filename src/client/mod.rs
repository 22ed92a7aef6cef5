//! 検索APIへの送信
//!
//! 送信手段は [`SearchTransport`] で差し替えられる。通常は [`HttpTransport`]。

mod http;

pub use http::HttpTransport;

use std::future::Future;
use visual_search_common::{Result, SearchRequest, UploadFile};

/// HTTPレスポンス（ステータスとボディのみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// 検索リクエストを1回送信する
///
/// リトライはしない。接続できない等の失敗は `Error::Transport` で返し、
/// ステータスの判定は呼び出し側で行う。
pub trait SearchTransport {
    fn post_search(
        &self,
        url: &str,
        request: &SearchRequest<UploadFile>,
    ) -> impl Future<Output = Result<RawResponse>> + Send;
}
