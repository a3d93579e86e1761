use super::view_model::{run_search, RequestSequence};
use crate::collection::api::fetch_query_results_from_term_and_value;
use crate::shared::config::use_search_config;
use contracts::collection::{SearchFacet, SearchResultSet};
use contracts::enums::SearchTerm;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Clickable facet value that searches the collection for it
#[component]
pub fn Searchable(
    /// Category sent to the search API
    search_term: SearchTerm,
    /// Value shown in the link and sent to the search API
    #[prop(into)]
    search_value: String,
    set_is_loading: Callback<bool>,
    set_search_results: Callback<SearchResultSet>,
    /// Latest-request-wins ordering; without it concurrent searches race
    #[prop(default = None)]
    sequence: Option<RequestSequence>,
) -> impl IntoView {
    let config = use_search_config();
    let label = search_value.clone();

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        let config = config.clone();
        let ticket = sequence.as_ref().map(RequestSequence::issue);
        spawn_local(run_search(
            SearchFacet::new(search_term, search_value.clone()),
            move |facet| async move {
                fetch_query_results_from_term_and_value(&config, facet.term, &facet.value).await
            },
            move |loading| set_is_loading.run(loading),
            move |results| set_search_results.run(results),
            ticket,
        ));
    };

    view! {
        <span class="content">
            <a href="#" on:click=on_click>{label}</a>
        </span>
    }
}
