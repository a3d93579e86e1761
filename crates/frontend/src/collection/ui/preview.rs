use contracts::collection::{FeaturedRecord, SearchResultSet};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// List of search results; clicking one features it
#[component]
pub fn Preview(
    #[prop(into)] search_results: Signal<SearchResultSet>,
    set_featured_result: Callback<FeaturedRecord>,
) -> impl IntoView {
    let items = move || {
        search_results
            .get()
            .records
            .into_iter()
            .map(|record| {
                let title = record
                    .title
                    .clone()
                    .unwrap_or_else(|| "MISSING INFO".to_string());
                let on_click = move |ev: MouseEvent| {
                    ev.prevent_default();
                    set_featured_result.run(record.clone());
                };
                view! {
                    <div class="object-preview">
                        <a href="#" on:click=on_click>
                            <h3>{title}</h3>
                        </a>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <aside id="preview">
            <section class="results">{items}</section>
        </aside>
    }
}
