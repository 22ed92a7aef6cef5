//! 検索リクエストの組み立て
//!
//! ファイルとURLの両方が入力されていた場合はファイルを優先する。

use crate::error::{Error, Result};
use serde::Serialize;

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

/// アップロードするファイル（ネイティブ側で使う実体）
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// URL指定時のJSONボディ
#[derive(Debug, Clone, Serialize)]
pub struct ImageUrlBody<'a> {
    pub image_url: &'a str,
}

/// 検索リクエスト
///
/// `F` はファイルの表現。CLIでは [`UploadFile`]、ブラウザでは `web_sys::File`。
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest<F> {
    FileUpload(F),
    UrlReference { image_url: String },
}

impl<F> SearchRequest<F> {
    /// 入力からリクエストを選択する
    ///
    /// 1. ファイルがあればファイル（URLは無視）
    /// 2. トリム後のURLが空でなければURL
    /// 3. どちらも無ければ [`Error::MissingInput`]
    pub fn select(file: Option<F>, url_text: &str) -> Result<Self> {
        if let Some(file) = file {
            return Ok(SearchRequest::FileUpload(file));
        }

        let url = url_text.trim();
        if url.is_empty() {
            return Err(Error::MissingInput);
        }

        Ok(SearchRequest::UrlReference {
            image_url: url.to_string(),
        })
    }

    pub fn is_file_upload(&self) -> bool {
        matches!(self, SearchRequest::FileUpload(_))
    }

    /// URL指定時のJSONボディ（ファイル時はNone）
    pub fn json_body(&self) -> Option<String> {
        match self {
            SearchRequest::FileUpload(_) => None,
            SearchRequest::UrlReference { image_url } => {
                // &strのみのシリアライズは失敗しない
                serde_json::to_string(&ImageUrlBody { image_url }).ok()
            }
        }
    }

    /// ログ用の短い説明
    pub fn describe(&self) -> String
    where
        F: FileLabel,
    {
        match self {
            SearchRequest::FileUpload(file) => format!("file={}", file.label()),
            SearchRequest::UrlReference { image_url } => format!("image_url={}", image_url),
        }
    }
}

/// ログ表示用のファイル名
pub trait FileLabel {
    fn label(&self) -> String;
}

impl FileLabel for UploadFile {
    fn label(&self) -> String {
        format!("{} ({}, {} bytes)", self.file_name, self.content_type, self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_jpg() -> UploadFile {
        UploadFile {
            file_name: "cat.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[test]
    fn test_select_missing_input() {
        let result = SearchRequest::<UploadFile>::select(None, "");
        assert!(matches!(result, Err(Error::MissingInput)));
    }

    #[test]
    fn test_select_whitespace_url_is_missing() {
        let result = SearchRequest::<UploadFile>::select(None, "   \t\n ");
        assert!(matches!(result, Err(Error::MissingInput)));
    }

    #[test]
    fn test_select_file_wins_over_url() {
        let request = SearchRequest::select(Some(cat_jpg()), "http://example.com/x.jpg").unwrap();
        assert_eq!(request, SearchRequest::FileUpload(cat_jpg()));
        assert!(request.json_body().is_none());
    }

    #[test]
    fn test_select_url_is_trimmed() {
        let request =
            SearchRequest::<UploadFile>::select(None, "  http://example.com/x.jpg \n").unwrap();
        assert_eq!(
            request,
            SearchRequest::UrlReference {
                image_url: "http://example.com/x.jpg".to_string()
            }
        );
    }

    #[test]
    fn test_json_body() {
        let request = SearchRequest::<UploadFile>::select(None, "http://example.com/x.jpg").unwrap();
        assert_eq!(
            request.json_body().as_deref(),
            Some(r#"{"image_url":"http://example.com/x.jpg"}"#)
        );
    }

    #[test]
    fn test_json_body_escapes_quotes() {
        let request = SearchRequest::<UploadFile>::select(None, r#"http://e.com/"q".jpg"#).unwrap();
        let body = request.json_body().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["image_url"], r#"http://e.com/"q".jpg"#);
    }

    #[test]
    fn test_describe() {
        let request = SearchRequest::select(Some(cat_jpg()), "").unwrap();
        assert_eq!(request.describe(), "file=cat.jpg (image/jpeg, 3 bytes)");
    }
}
