//! メインアプリケーションコンポーネント
//!
//! 検索ボタンを押すたびに1回だけ検索する。前の検索が終わる前に押された場合は
//! 新しい方だけが表示を書き換え、古い応答は捨てる。

use leptos::html::Input;
use leptos::logging::{error, log};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use visual_search_common::{
    render, Backend, Error, Outcome, SearchRequest, SearchResponse, SearchSession,
    SearchTicket, ViewState,
};

use crate::api;
use crate::components::{
    header::Header,
    loading::Loading,
    query_image::QueryImage,
    results::Results,
    search_form::SearchForm,
};
use crate::preview::ObjectUrl;

/// 失敗時：ローディングを消し、ログを出してからアラート
fn show_failure(backend: &Backend, set_view_state: WriteSignal<ViewState>, err: &Error) {
    error!("検索に失敗しました: {}", err);
    set_view_state.set(render(backend, Outcome::Failure(err)));
    gloo::dialogs::alert(err.alert_message());
}

/// クエリ画像の参照元
pub(crate) enum PreviewSource<P> {
    /// URL検索：入力をそのまま表示
    Url(String),
    /// ファイル検索：`handle` はセッションが保持し、次の検索で解放する
    Handle { src: String, handle: P },
    /// プレビューを作れなかった
    Unavailable,
}

/// 応答を受けたあとの処理
///
/// チケットが古ければNoneを返し、結果もプレビューも作らない。
/// 最新なら失敗はそのまま返し、成功時はプレビューを保持して表示状態を作る。
pub(crate) fn settle_search<P>(
    session: &mut SearchSession<P>,
    ticket: SearchTicket,
    backend: &Backend,
    result: Result<SearchResponse, Error>,
    make_preview: impl FnOnce() -> PreviewSource<P>,
) -> Option<Result<ViewState, Error>> {
    let response = match session.settle(ticket, result)? {
        Ok(response) => response,
        Err(err) => return Some(Err(err)),
    };

    let preview_src = match make_preview() {
        PreviewSource::Url(src) => Some(src),
        PreviewSource::Handle { src, handle } => {
            // 最新のチケットなので必ず保持される
            let _ = session.attach_preview(ticket, handle);
            Some(src)
        }
        PreviewSource::Unavailable => None,
    };

    Some(Ok(render(
        backend,
        Outcome::Success {
            preview_src,
            response: &response,
        },
    )))
}

fn preview_source(request: &SearchRequest<File>) -> PreviewSource<ObjectUrl> {
    match request {
        SearchRequest::FileUpload(file) => match ObjectUrl::from_blob(file) {
            Ok(handle) => PreviewSource::Handle {
                src: handle.url().to_string(),
                handle,
            },
            Err(e) => {
                error!("プレビューURLの作成に失敗しました: {:?}", e);
                PreviewSource::Unavailable
            }
        },
        SearchRequest::UrlReference { image_url } => PreviewSource::Url(image_url.clone()),
    }
}

/// 選択中のファイル（0件または1件）
fn selected_file(file_input: NodeRef<Input>) -> Option<File> {
    file_input
        .get_untracked()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

#[component]
pub fn App() -> impl IntoView {
    let backend = Backend::default();
    let file_input = NodeRef::<Input>::new();
    let (url_text, set_url_text) = signal(String::new());
    let (view_state, set_view_state) = signal(ViewState::default());
    let session = StoredValue::new_local(SearchSession::<ObjectUrl>::new());

    let on_search = move |_| {
        let Some(ticket) = session.try_update_value(|s| s.begin()) else {
            return;
        };
        set_view_state.set(ViewState::loading());

        let request = match SearchRequest::select(selected_file(file_input), &url_text.get_untracked()) {
            Ok(request) => request,
            Err(err) => {
                show_failure(&backend, set_view_state, &err);
                return;
            }
        };

        let backend = backend.clone();
        spawn_local(async move {
            let result = api::post_search(&backend, &request).await;

            let settled = session
                .try_update_value(|s| {
                    settle_search(s, ticket, &backend, result, || preview_source(&request))
                })
                .flatten();

            match settled {
                Some(Ok(state)) => set_view_state.set(state),
                Some(Err(err)) => show_failure(&backend, set_view_state, &err),
                None => log!("古い検索結果を破棄しました (ticket {})", ticket.id()),
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <SearchForm
                file_input=file_input
                url_text=url_text
                set_url_text=set_url_text
                on_search=on_search
            />

            <Show when=move || view_state.with(|s| s.is_loading())>
                <Loading />
            </Show>

            <div id="queryImage">
                {move || {
                    view_state
                        .with(|s| s.query_preview.clone())
                        .map(|preview| view! { <QueryImage preview=preview /> })
                }}
            </div>

            <div id="results">
                {move || {
                    let results = view_state.with(|s| s.results.clone());
                    view! { <Results results=results /> }
                }}
            </div>
        </div>
    }
}
