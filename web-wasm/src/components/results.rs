//! 類似商品カード一覧

use leptos::prelude::*;
use visual_search_common::{ResultCard, ResultsView, NO_RESULTS_MESSAGE};

#[component]
pub fn Results(results: ResultsView) -> impl IntoView {
    match results {
        ResultsView::Empty => ().into_any(),
        ResultsView::NoResults => view! { <p class="no-results">{NO_RESULTS_MESSAGE}</p> }.into_any(),
        ResultsView::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <ProductCard card=card /> })
            .collect_view()
            .into_any(),
    }
}

#[component]
fn ProductCard(card: ResultCard) -> impl IntoView {
    let alt = card.name.clone();
    view! {
        <div class="card">
            <img src=card.image_src alt=alt />
            <h3>{card.name}</h3>
            <p>{card.category}</p>
            <p>"Similarity: " {card.similarity}</p>
        </div>
    }
}
