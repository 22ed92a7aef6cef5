//! 検索フォーム（画像ファイル・画像URL・検索ボタン）

use leptos::html::Input;
use leptos::prelude::*;

#[component]
pub fn SearchForm<F>(
    file_input: NodeRef<Input>,
    url_text: ReadSignal<String>,
    set_url_text: WriteSignal<String>,
    on_search: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="search-form">
            <div class="form-group">
                <label for="imgFile">"Upload an image"</label>
                <input type="file" id="imgFile" accept="image/*" node_ref=file_input />
            </div>

            <div class="form-group">
                <label for="imgUrl">"or paste an image URL"</label>
                <input
                    type="text"
                    id="imgUrl"
                    placeholder="https://..."
                    prop:value=move || url_text.get()
                    on:input=move |ev| {
                        set_url_text.set(event_target_value(&ev));
                    }
                />
            </div>

            <button
                id="searchBtn"
                class="btn btn-primary"
                on:click={
                    let on_search = on_search.clone();
                    move |_| on_search(())
                }
            >
                "Search"
            </button>
        </div>
    }
}
