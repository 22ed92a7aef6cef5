//! 検索コントローラ
//!
//! 1回の呼び出しで「入力チェック → リクエスト組み立て → 送信 → 判定 → 表示」を行う。
//! 表示は [`ViewSink`] に [`ViewState`] を渡すだけで、端末やファイルへの出力は持たない。

use crate::client::SearchTransport;
use crate::upload;
use visual_search_common::{
    check_response, render, Backend, Outcome, Result, SearchRequest, SearchResponse,
    SearchSession, UploadFile, ViewState,
};

/// 表示先
pub trait ViewSink {
    fn paint(&mut self, state: &ViewState);
}

/// 1回の検索の結果
#[derive(Debug)]
pub struct Invocation {
    /// 最終的な表示状態
    pub view: ViewState,
    /// 受信したレスポンス、または失敗理由
    pub outcome: Result<SearchResponse>,
}

impl Invocation {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub struct SearchController<T> {
    transport: T,
    backend: Backend,
    /// プレビューはdata URLなので解放処理は不要
    session: SearchSession<String>,
}

impl<T: SearchTransport> SearchController<T> {
    pub fn new(transport: T, backend: Backend) -> Self {
        Self {
            transport,
            backend,
            session: SearchSession::new(),
        }
    }

    /// 検索を1回実行する
    ///
    /// ファイルがあればURLは無視する。どちらも無ければ送信せずに失敗する。
    /// 失敗しても次の呼び出しはそのまま受け付ける。
    pub async fn handle_search_invocation<S: ViewSink>(
        &mut self,
        file: Option<UploadFile>,
        url_text: &str,
        sink: &mut S,
    ) -> Invocation {
        let ticket = self.session.begin();
        sink.paint(&ViewState::loading());

        let outcome = match SearchRequest::select(file, url_text) {
            Ok(request) => self.dispatch(&request).await.map(|response| {
                let preview_src = match &request {
                    SearchRequest::FileUpload(file) => upload::data_url(file),
                    SearchRequest::UrlReference { image_url } => image_url.clone(),
                };
                (preview_src, response)
            }),
            Err(e) => Err(e),
        };

        let (view, outcome) = match outcome {
            Ok((preview_src, response)) => {
                let preview_src = match self.session.attach_preview(ticket, preview_src) {
                    Ok(src) => src.clone(),
                    Err(src) => src,
                };
                let view = render(
                    &self.backend,
                    Outcome::Success {
                        preview_src: Some(preview_src),
                        response: &response,
                    },
                );
                log::info!("検索完了: {}件", response.items().len());
                (view, Ok(response))
            }
            Err(e) => {
                log::error!("検索に失敗しました: {}", e);
                (render(&self.backend, Outcome::Failure(&e)), Err(e))
            }
        };

        sink.paint(&view);
        Invocation { view, outcome }
    }

    async fn dispatch(&self, request: &SearchRequest<UploadFile>) -> Result<SearchResponse> {
        let url = self.backend.search_url();
        log::info!("POST {} ({})", url, request.describe());

        let raw = self.transport.post_search(&url, request).await?;
        check_response(raw.status, &raw.body)
    }
}
