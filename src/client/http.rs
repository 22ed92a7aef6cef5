use super::{RawResponse, SearchTransport};
use reqwest::multipart::{Form, Part};
use std::error::Error as _;
use std::time::Duration;
use visual_search_common::request::ImageUrlBody;
use visual_search_common::{Error, Result, SearchRequest, UploadFile, FILE_FIELD};

/// reqwestによる送信
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// `timeout` がNoneならreqwestの既定（タイムアウトなし）
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Transport(format!("HTTPクライアント初期化エラー: {}", e)))?;
        Ok(Self { client })
    }
}

fn multipart_form(file: &UploadFile) -> Result<Form> {
    let part = Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type)
        .map_err(|e| Error::Transport(format!("Content-Typeが不正です: {}", e)))?;
    Ok(Form::new().part(FILE_FIELD, part))
}

/// エラーの原因を連結して1行にする（DNS失敗などは内側にある）
fn describe_error(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl SearchTransport for HttpTransport {
    async fn post_search(
        &self,
        url: &str,
        request: &SearchRequest<UploadFile>,
    ) -> Result<RawResponse> {
        let builder = self.client.post(url);
        let builder = match request {
            SearchRequest::FileUpload(file) => builder.multipart(multipart_form(file)?),
            SearchRequest::UrlReference { image_url } => builder.json(&ImageUrlBody { image_url }),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(describe_error(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(describe_error(&e)))?;

        log::debug!("レスポンス: status={} ({} bytes)", status, body.len());

        Ok(RawResponse { status, body })
    }
}
