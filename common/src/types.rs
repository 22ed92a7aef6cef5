//! 検索レスポンスの型定義
//!
//! バックエンド `/api/search` が返すJSON:
//! `{"results": [{"id": 3, "image": "p/1.jpg", "name": "...", "category": "...", "similarity": 0.92}]}`

use serde::{Deserialize, Serialize};
use std::fmt;

/// 類似度スコア
///
/// 小数（0.92）かパーセント表記か等はバックエンド次第なので、
/// 受け取った値をそのまま表示用に保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Similarity {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Similarity::Number(n) => write!(f, "{}", n),
            Similarity::Text(s) => write!(f, "{}", s),
        }
    }
}

/// 類似商品1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// 商品ID（バックエンドが返す場合のみ）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,

    /// バックエンドからの相対パス
    pub image: String,

    pub name: String,

    pub category: String,

    pub similarity: Similarity,
}

/// 検索レスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// キーが無い場合も「結果なし」として扱う
    #[serde(default)]
    pub results: Option<Vec<ResultItem>>,
}

impl SearchResponse {
    /// 結果を受信順で返す（キーなし・空配列はどちらも空）
    pub fn items(&self) -> &[ResultItem] {
        self.results.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// バックエンドのエラーボディ `{"error": "..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct BackendErrorBody {
    pub error: String,
}
