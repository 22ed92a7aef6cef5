//! アップロード画像の読み込み

use crate::error::{Result, VisualSearchError};
use base64::Engine;
use image::ImageFormat;
use std::path::Path;
use visual_search_common::UploadFile;

const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

/// 拡張子からMIMEタイプを引く（大文字小文字は無視）
fn content_type_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

/// 画像ファイルを読み込む
///
/// MIMEタイプは拡張子から決め、分からなければ先頭バイトから推定する。
/// どちらでも画像と判定できなければエラー。
pub fn load_image(path: &Path) -> Result<UploadFile> {
    if !path.is_file() {
        return Err(VisualSearchError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;

    let content_type = match content_type_from_extension(path) {
        Some(mime) => mime.to_string(),
        None => image::guess_format(&bytes)
            .map(|format: ImageFormat| format.to_mime_type().to_string())
            .map_err(|_| VisualSearchError::UnsupportedImage(path.display().to_string()))?,
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());

    log::debug!("読み込み: {} ({}, {} bytes)", file_name, content_type, bytes.len());

    Ok(UploadFile {
        file_name,
        content_type,
        bytes,
    })
}

/// プレビュー用のdata URL
pub fn data_url(file: &UploadFile) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
    format!("data:{};base64,{}", file.content_type, encoded)
}
