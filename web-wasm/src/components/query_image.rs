//! クエリ画像のプレビュー

use leptos::prelude::*;
use visual_search_common::{QueryPreview, QUERY_HEADING};

#[component]
pub fn QueryImage(preview: QueryPreview) -> impl IntoView {
    view! {
        <h3>{QUERY_HEADING}</h3>
        <img src=preview.src alt="query image" />
    }
}
