//! アップロード画像のプレビュー用object URL
//!
//! `URL.createObjectURL` で作ったURLはブラウザが保持し続けるため、
//! dropした時点で `URL.revokeObjectURL` する。

use wasm_bindgen::JsValue;
use web_sys::{Blob, Url};

#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn from_blob(blob: &Blob) -> Result<Self, JsValue> {
        let url = Url::create_object_url_with_blob(blob)?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_object_url_is_blob_url() {
        let blob = Blob::new().unwrap();
        let preview = ObjectUrl::from_blob(&blob).unwrap();
        assert!(preview.url().starts_with("blob:"));
    }
}
