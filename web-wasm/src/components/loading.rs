//! ローディング表示

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div id="loading" class="loading">
            <div class="spinner" />
            <p class="loading-text">"Searching for similar products..."</p>
        </div>
    }
}
