//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use std::path::Path;
use visual_search::error::VisualSearchError;
use visual_search::upload;
use visual_search_common::{FAILURE_ALERT, MISSING_INPUT_ALERT};

/// 存在しない画像を指定した場合
#[test]
fn test_load_nonexistent_image() {
    let result = upload::load_image(Path::new("/nonexistent/path/12345.jpg"));
    let err = result.unwrap_err();
    assert!(matches!(err, VisualSearchError::FileNotFound(_)));
    // 検索前のエラーなのでアラートは出さない
    assert!(err.alert_message().is_none());
}

/// VisualSearchErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        VisualSearchError::Config("テスト設定エラー".to_string()),
        VisualSearchError::FileNotFound("cat.jpg".to_string()),
        VisualSearchError::UnsupportedImage("notes.txt".to_string()),
        VisualSearchError::Common(visual_search_common::Error::MissingInput),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = visual_search_common::Error::Server {
        status: 503,
        detail: None,
    };
    let err: VisualSearchError = common_err.into();

    assert!(matches!(err, VisualSearchError::Common(_)));
    assert_eq!(format!("{}", err), "サーバーエラー (status 503)");
    assert_eq!(err.alert_message(), Some(FAILURE_ALERT));
}

/// 入力なしのアラート
#[test]
fn test_missing_input_alert() {
    let err: VisualSearchError = visual_search_common::Error::MissingInput.into();
    assert_eq!(err.alert_message(), Some(MISSING_INPUT_ALERT));
}

/// common側の設定エラーはアラート対象外
#[test]
fn test_common_config_error_has_no_alert() {
    let err: VisualSearchError = visual_search_common::Error::Config("empty".to_string()).into();
    assert!(err.alert_message().is_none());
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: VisualSearchError = io_err.into();

    assert!(matches!(err, VisualSearchError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: VisualSearchError = json_err.into();

    assert!(matches!(err, VisualSearchError::JsonParse(_)));
}
