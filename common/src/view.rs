//! 表示状態
//!
//! DOMや端末に直接書き込まず、1回の検索の結果を [`ViewState`] として組み立てる。
//! 描画側（CLI出力・Leptosコンポーネント）はこの値をそのまま表示するだけ。

use crate::endpoint::Backend;
use crate::error::Error;
use crate::types::SearchResponse;
use serde::Serialize;

/// 結果0件時のプレースホルダ
pub const NO_RESULTS_MESSAGE: &str = "No similar products found";

/// クエリ画像の見出し
pub const QUERY_HEADING: &str = "Your Query Image:";

/// 検索の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Rendered,
    Failed,
}

/// クエリ画像のプレビュー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryPreview {
    /// `<img src>` に入れる値（URLそのもの、またはローカル参照）
    pub src: String,
}

/// 結果カード1枚
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub image_src: String,
    pub name: String,
    pub category: String,
    /// 表示用の類似度（加工しない）
    pub similarity: String,
}

/// 結果領域
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum ResultsView {
    /// 何も表示しない（初期状態・読み込み中・失敗時）
    #[default]
    Empty,
    /// 「見つかりません」を1つだけ表示
    NoResults,
    Cards(Vec<ResultCard>),
}

/// 画面全体の状態
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub phase: Phase,
    pub query_preview: Option<QueryPreview>,
    pub results: ResultsView,
    /// ユーザー向けアラート（失敗時のみ）
    pub alert: Option<String>,
}

impl ViewState {
    /// 検索開始時の状態：前回のプレビューと結果を消してローディング表示
    pub fn loading() -> Self {
        Self {
            phase: Phase::Loading,
            ..Default::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn cards(&self) -> &[ResultCard] {
        match &self.results {
            ResultsView::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn shows_no_results(&self) -> bool {
        self.results == ResultsView::NoResults
    }
}

/// 1回の検索の結末
#[derive(Debug)]
pub enum Outcome<'a> {
    Success {
        /// プレビューを用意できなかった場合はNone（画像を出さない）
        preview_src: Option<String>,
        response: &'a SearchResponse,
    },
    Failure(&'a Error),
}

/// 結果をカードに変換（受信順を保つ）
pub fn render_results(backend: &Backend, response: &SearchResponse) -> ResultsView {
    if response.is_empty() {
        return ResultsView::NoResults;
    }

    let cards = response
        .items()
        .iter()
        .map(|item| ResultCard {
            image_src: backend.image_url(&item.image),
            name: item.name.clone(),
            category: item.category.clone(),
            similarity: item.similarity.to_string(),
        })
        .collect();

    ResultsView::Cards(cards)
}

/// 結末から表示状態を作る（純粋関数）
pub fn render(backend: &Backend, outcome: Outcome<'_>) -> ViewState {
    match outcome {
        Outcome::Success {
            preview_src,
            response,
        } => ViewState {
            phase: Phase::Rendered,
            query_preview: preview_src.map(|src| QueryPreview { src }),
            results: render_results(backend, response),
            alert: None,
        },
        Outcome::Failure(err) => ViewState {
            phase: Phase::Failed,
            query_preview: None,
            results: ResultsView::Empty,
            alert: Some(err.alert_message().to_string()),
        },
    }
}
