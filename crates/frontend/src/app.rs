use crate::collection::ui::{Feature, Preview, RequestSequence};
use crate::shared::config::SearchConfig;
use contracts::collection::{FeaturedRecord, SearchResultSet};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(SearchConfig::default());

    // State shared by the preview list and the feature panel
    let is_loading = RwSignal::new(false);
    let search_results = RwSignal::new(SearchResultSet::default());
    let featured_result = RwSignal::new(None::<FeaturedRecord>);

    let set_is_loading = Callback::new(move |loading: bool| is_loading.set(loading));
    let set_search_results =
        Callback::new(move |results: SearchResultSet| search_results.set(results));
    let set_featured_result =
        Callback::new(move |record: FeaturedRecord| featured_result.set(Some(record)));

    view! {
        <div id="app">
            <Preview search_results=search_results set_featured_result=set_featured_result />
            <Feature
                featured_result=featured_result
                set_is_loading=set_is_loading
                set_search_results=set_search_results
                sequence=RequestSequence::new()
            />
            <Show when=move || is_loading.get()>
                <div id="loading" class="active"></div>
            </Show>
        </div>
    }
}
