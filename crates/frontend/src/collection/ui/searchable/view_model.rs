use contracts::collection::{SearchFacet, SearchResultSet};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Issues a ticket per search so that only the newest one may publish results.
///
/// Without a sequence every settled search publishes, and concurrent facet
/// clicks race: whichever settles last wins.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence(Arc<AtomicU64>);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> SearchTicket {
        let id = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        SearchTicket {
            id,
            sequence: self.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SearchTicket {
    id: u64,
    sequence: RequestSequence,
}

impl SearchTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_latest(&self) -> bool {
        self.sequence.0.load(Ordering::SeqCst) == self.id
    }
}

/// Activation of a searchable facet.
///
/// `set_is_loading(true)` fires before this returns; the returned future runs
/// the search, hands a successful result to `set_search_results`, logs a
/// failure, and always finishes with a single `set_is_loading(false)`.
pub fn run_search<S, Fut, L, R>(
    facet: SearchFacet,
    search: S,
    set_is_loading: L,
    set_search_results: R,
    ticket: Option<SearchTicket>,
) -> impl Future<Output = ()>
where
    S: FnOnce(SearchFacet) -> Fut,
    Fut: Future<Output = Result<SearchResultSet, String>>,
    L: Fn(bool),
    R: Fn(SearchResultSet),
{
    set_is_loading(true);
    log::debug!("search started: {}={}", facet.term, facet.value);

    async move {
        let term = facet.term;
        match search(facet).await {
            Ok(results) => match &ticket {
                Some(t) if !t.is_latest() => {
                    log::debug!("search #{} superseded, dropping results", t.id());
                }
                _ => set_search_results(results),
            },
            Err(e) => log::error!("search by {} failed: {}", term, e),
        }
        set_is_loading(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::collection::FeaturedRecord;
    use contracts::enums::SearchTerm;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Event {
        Loading(bool),
        Searched(SearchFacet),
        Results(usize),
    }

    fn results_with(titles: &[&str]) -> SearchResultSet {
        SearchResultSet {
            info: serde_json::Value::Null,
            records: titles
                .iter()
                .map(|t| FeaturedRecord {
                    title: Some(t.to_string()),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_success_publishes_results_between_loading_flags() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let facet = SearchFacet::new(SearchTerm::Culture, "Greek");

        let search_log = events.clone();
        let loading_log = events.clone();
        let results_log = events.clone();
        let task = run_search(
            facet.clone(),
            move |f| {
                search_log.borrow_mut().push(Event::Searched(f));
                async { Ok(results_with(&["Amphora", "Krater"])) }
            },
            move |v| loading_log.borrow_mut().push(Event::Loading(v)),
            move |r: SearchResultSet| results_log.borrow_mut().push(Event::Results(r.records.len())),
            None,
        );

        assert_eq!(*events.borrow(), vec![Event::Loading(true)]);
        block_on(task);
        assert_eq!(
            *events.borrow(),
            vec![
                Event::Loading(true),
                Event::Searched(facet),
                Event::Results(2),
                Event::Loading(false),
            ]
        );
    }

    #[test]
    fn test_failure_skips_results_and_clears_loading() {
        let loading = Rc::new(RefCell::new(Vec::new()));
        let published = Rc::new(RefCell::new(0));

        let loading_log = loading.clone();
        let published_count = published.clone();
        block_on(run_search(
            SearchFacet::new(SearchTerm::Technique, "Wheelthrown"),
            |_| async { Err("HTTP error: 500".to_string()) },
            move |v| loading_log.borrow_mut().push(v),
            move |_| *published_count.borrow_mut() += 1,
            None,
        ));

        assert_eq!(*loading.borrow(), vec![true, false]);
        assert_eq!(*published.borrow(), 0);
    }

    #[test]
    fn test_without_sequence_last_settled_wins() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let (first_tx, first_rx) = oneshot::channel::<SearchResultSet>();
        let (second_tx, second_rx) = oneshot::channel::<SearchResultSet>();

        let shown_a = shown.clone();
        let first = run_search(
            SearchFacet::new(SearchTerm::Culture, "Greek"),
            move |_| async move { first_rx.await.map_err(|e| e.to_string()) },
            |_| {},
            move |r: SearchResultSet| shown_a.borrow_mut().push(r.records[0].title.clone()),
            None,
        );
        let shown_b = shown.clone();
        let second = run_search(
            SearchFacet::new(SearchTerm::Culture, "Roman"),
            move |_| async move { second_rx.await.map_err(|e| e.to_string()) },
            |_| {},
            move |r: SearchResultSet| shown_b.borrow_mut().push(r.records[0].title.clone()),
            None,
        );

        second_tx.send(results_with(&["Roman bust"])).unwrap();
        first_tx.send(results_with(&["Greek vase"])).unwrap();
        block_on(second);
        block_on(first);

        assert_eq!(
            shown.borrow().last().cloned().flatten().as_deref(),
            Some("Greek vase")
        );
    }

    #[test]
    fn test_sequence_drops_superseded_results() {
        let sequence = RequestSequence::new();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let loading = Rc::new(RefCell::new(Vec::new()));

        let first_ticket = sequence.issue();
        let second_ticket = sequence.issue();
        assert!(!first_ticket.is_latest());
        assert!(second_ticket.is_latest());

        for (value, ticket) in [("Roman bust", second_ticket), ("Greek vase", first_ticket)] {
            let shown_log = shown.clone();
            let loading_log = loading.clone();
            block_on(run_search(
                SearchFacet::new(SearchTerm::Culture, value),
                move |f| async move { Ok(results_with(&[f.value.as_str()])) },
                move |v| loading_log.borrow_mut().push(v),
                move |r: SearchResultSet| shown_log.borrow_mut().push(r.records[0].title.clone()),
                Some(ticket),
            ));
        }

        assert_eq!(*shown.borrow(), vec![Some("Roman bust".to_string())]);
        assert_eq!(*loading.borrow(), vec![true, false, true, false]);
    }
}
