//! 検索API呼び出し（fetch）
//!
//! ファイルはFormDataの `file` フィールド、URLはJSONボディで送る。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use visual_search_common::{
    check_response, Backend, Error, SearchRequest, SearchResponse, FILE_FIELD,
};

fn js_error(context: &str, value: JsValue) -> Error {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(format!("{}: {}", context, message))
}

fn build_request(backend: &Backend, request: &SearchRequest<File>) -> Result<Request, Error> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    match request {
        SearchRequest::FileUpload(file) => {
            let form = FormData::new().map_err(|e| js_error("FormData作成エラー", e))?;
            form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
                .map_err(|e| js_error("FormData追加エラー", e))?;
            opts.set_body(&form);
        }
        SearchRequest::UrlReference { .. } => {
            let body = request.json_body().unwrap_or_default();
            opts.set_body(&JsValue::from_str(&body));
        }
    }

    let fetch_request = Request::new_with_str_and_init(&backend.search_url(), &opts)
        .map_err(|e| js_error("リクエスト作成エラー", e))?;

    if !request.is_file_upload() {
        fetch_request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| js_error("ヘッダー設定エラー", e))?;
    }

    Ok(fetch_request)
}

/// 検索APIを1回呼び出す（リトライなし）
pub async fn post_search(
    backend: &Backend,
    request: &SearchRequest<File>,
) -> Result<SearchResponse, Error> {
    let fetch_request = build_request(backend, request)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("windowがありません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(|e| js_error("fetchエラー", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| js_error("Responseではありません", e))?;

    let text_promise = resp.text().map_err(|e| js_error("ボディ読み込みエラー", e))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| js_error("ボディ読み込みエラー", e))?
        .as_string()
        .unwrap_or_default();

    check_response(resp.status(), &body)
}
