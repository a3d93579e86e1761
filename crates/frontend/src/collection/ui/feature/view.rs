use super::view_model::{fact_rows, photo_views, FactRow};
use crate::collection::ui::searchable::{RequestSequence, Searchable};
use contracts::collection::{FeaturedRecord, SearchResultSet};
use leptos::prelude::*;

/// Detail panel of the featured object
///
/// Renders an empty `<main id="feature">` until a record is featured.
#[component]
pub fn Feature(
    #[prop(into)] featured_result: Signal<Option<FeaturedRecord>>,
    set_is_loading: Callback<bool>,
    set_search_results: Callback<SearchResultSet>,
    #[prop(optional)] sequence: Option<RequestSequence>,
) -> impl IntoView {
    let render_row = move |row: FactRow, sequence: Option<RequestSequence>| {
        let label = row.label();
        match row {
            FactRow::Plain { value, .. } => view! {
                <span class="title">{label}</span>
                <span class="content">{value}</span>
            }
            .into_any(),
            FactRow::Search { facet, .. } => view! {
                <span class="title">{label}</span>
                <Searchable
                    search_term=facet.term
                    search_value=facet.value
                    set_is_loading=set_is_loading
                    set_search_results=set_search_results
                    sequence=sequence
                />
            }
            .into_any(),
        }
    };

    let panel = move || {
        featured_result.get().map(|record| {
            let facts = fact_rows(&record)
                .into_iter()
                .map(|row| render_row(row, sequence.clone()))
                .collect_view();
            let photos = photo_views(&record)
                .into_iter()
                .map(|photo| view! { <img src=photo.src alt=photo.alt /> })
                .collect_view();

            view! {
                <div class="object-feature">
                    <header>
                        <h3>{record.title.clone().unwrap_or_default()}</h3>
                        <h4>{record.dated.clone().unwrap_or_default()}</h4>
                    </header>
                    <section class="facts">{facts}</section>
                    <section class="photos">{photos}</section>
                </div>
            }
        })
    };

    view! { <main id="feature">{panel}</main> }
}
