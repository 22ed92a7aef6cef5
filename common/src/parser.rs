//! APIレスポンスパーサー
//!
//! ステータス判定とボディのパースを行う。
//! 2xx以外はステータスコードの内容によらず失敗として扱う。

use crate::error::{Error, Result};
use crate::types::{BackendErrorBody, SearchResponse};

/// ステータスが成功範囲(2xx)か
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// エラーボディから `{"error": "..."}` のメッセージを取り出す
///
/// JSONでなければ先頭200文字をそのまま返す。空ならNone。
pub fn extract_error_detail(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<BackendErrorBody>(body) {
        return Some(parsed.error);
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(200).collect())
    }
}

/// 検索レスポンスのボディをパース
///
/// # Returns
/// * `Ok(SearchResponse)` - パース成功（resultsキーなしも成功）
/// * `Err(Error::MalformedResponse)` - JSONでない、または形が合わない
pub fn parse_search_response(body: &str) -> Result<SearchResponse> {
    serde_json::from_str(body.trim())
        .map_err(|e| Error::MalformedResponse(format!("JSONパースエラー: {}", e)))
}

/// ステータスとボディから検索結果を得る
///
/// # Examples
/// ```
/// use visual_search_common::check_response;
///
/// let response = check_response(200, r#"{"results": []}"#).unwrap();
/// assert!(response.is_empty());
/// assert!(check_response(500, "").is_err());
/// ```
pub fn check_response(status: u16, body: &str) -> Result<SearchResponse> {
    if !is_success_status(status) {
        return Err(Error::Server {
            status,
            detail: extract_error_detail(body),
        });
    }
    parse_search_response(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(is_success_status(299));
        assert!(!is_success_status(199));
        assert!(!is_success_status(300));
        assert!(!is_success_status(404));
        assert!(!is_success_status(500));
    }

    #[test]
    fn test_check_response_ok() {
        let body = r#"{"results":[{"image":"p/1.jpg","name":"Cat Toy","category":"Pets","similarity":0.92}]}"#;
        let response = check_response(200, body).unwrap();
        assert_eq!(response.items().len(), 1);
    }

    #[test]
    fn test_check_response_server_error_with_backend_message() {
        let err = check_response(400, r#"{"error": "No image provided"}"#).unwrap_err();
        match err {
            Error::Server { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail.as_deref(), Some("No image provided"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_check_response_server_error_html_body() {
        let err = check_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(
            err,
            Error::Server { status: 502, detail: Some(ref d) } if d.contains("Bad Gateway")
        ));
    }

    #[test]
    fn test_check_response_server_error_empty_body() {
        let err = check_response(500, "  ").unwrap_err();
        assert!(matches!(err, Error::Server { status: 500, detail: None }));
    }

    #[test]
    fn test_server_error_body_is_not_parsed_as_results() {
        // 2xx以外はボディが正しい形でも失敗
        let err = check_response(500, r#"{"results": []}"#).unwrap_err();
        assert!(matches!(err, Error::Server { status: 500, .. }));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_search_response("not json").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let err = parse_search_response(r#"{"results": "nope"}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_null_results() {
        let response = parse_search_response(r#"{"results": null}"#).unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_error_detail_truncated() {
        let body = "x".repeat(500);
        assert_eq!(extract_error_detail(&body).unwrap().len(), 200);
    }
}
