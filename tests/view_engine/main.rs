//! Integration tests for the view engine's query-state transitions.

mod catalog;

use catalog::{ids, numbered, price_ties, titles, twelve_fruits};
use product_view::{
    PageLink, QueryState, Record, ResultsSummary, SortField, SortOrder, ViewEngine,
};

fn engine_with(records: Vec<Record>) -> ViewEngine {
    let mut engine = ViewEngine::default();
    engine.initialize(records);
    engine
}

#[test]
fn unmatched_search_is_empty() {
    let mut engine = engine_with(twelve_fruits());
    engine.search("zzz");

    assert_eq!(engine.results_summary(), ResultsSummary::Empty);
    assert_eq!(engine.results_summary().total(), 0);
    assert!(engine.current_page_items().is_empty());
    assert!(engine.pagination_window().is_empty());
}

#[test]
fn blank_search_is_identity() {
    let mut engine = engine_with(twelve_fruits());
    engine.search("pe");
    engine.search("   ");

    let expected: Vec<u64> = (1..=12).collect();
    assert_eq!(ids(&engine.matched()), expected);
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let mut engine = engine_with(twelve_fruits());

    engine.search("AP");
    let upper = ids(&engine.matched());
    engine.search("  ap ");
    let lower = ids(&engine.matched());

    assert_eq!(upper, lower);
    // Apple, Grape, Papaya, Apricot
    assert_eq!(upper, vec![1, 3, 4, 8]);
}

#[test]
fn search_is_idempotent_with_active_sort() {
    let mut engine = engine_with(price_ties());
    engine.sort(SortField::Price, SortOrder::Descending);

    engine.search("a");
    let first = ids(&engine.matched());
    engine.search("a");
    assert_eq!(ids(&engine.matched()), first);
}

#[test]
fn sort_is_stable_against_previous_order() {
    let mut engine = engine_with(price_ties());

    engine.sort(SortField::Name, SortOrder::Ascending);
    assert_eq!(
        titles(&engine.matched()),
        vec!["alpha", "Bravo", "Charlie", "Delta", "echo"]
    );

    // ties keep the name order they had just before this sort
    engine.sort(SortField::Price, SortOrder::Descending);
    assert_eq!(ids(&engine.matched()), vec![5, 3, 1, 2, 4]);

    // a new search starts again from collection order
    engine.search("");
    assert_eq!(ids(&engine.matched()), vec![5, 1, 3, 2, 4]);
}

#[test]
fn price_descending_reverses_ascending() {
    let mut engine = engine_with(twelve_fruits());

    engine.sort(SortField::Price, SortOrder::Ascending);
    let mut ascending = ids(&engine.matched());
    engine.sort(SortField::Price, SortOrder::Descending);
    let descending = ids(&engine.matched());

    ascending.reverse();
    assert_eq!(descending, ascending);
}

#[test]
fn name_sort_follows_reading_order() {
    let mut engine = engine_with(vec![
        Record::new(1, "Zucchini", 1.0),
        Record::new(2, "Éclair", 2.0),
        Record::new(3, "apple", 3.0),
        Record::new(4, "Eggplant", 4.0),
    ]);
    assert!(engine.is_locale_aware());

    engine.sort(SortField::Name, SortOrder::Ascending);
    assert_eq!(
        titles(&engine.matched()),
        vec!["apple", "Éclair", "Eggplant", "Zucchini"]
    );
}

#[test]
fn search_always_returns_to_first_page() {
    let mut engine = engine_with(numbered(25));
    assert!(engine.go_to_page(3));

    engine.search("item");
    assert_eq!(engine.query().page, 1);
    assert_eq!(engine.matched_len(), 25);
}

#[test]
fn sort_keeps_current_page() {
    let mut engine = engine_with(numbered(25));
    assert!(engine.go_to_page(3));

    engine.sort(SortField::Price, SortOrder::Descending);
    assert_eq!(engine.query().page, 3);
    assert_eq!(ids(&engine.current_page_items()), vec![5, 4, 3, 2, 1]);
}

#[test]
fn out_of_range_navigation_changes_nothing() {
    let mut engine = engine_with(numbered(25));
    engine.go_to_page(2);
    let before: QueryState = engine.query().clone();

    for page in [-5, 0, 4, 100] {
        assert!(!engine.go_to_page(page));
        assert_eq!(engine.query(), &before);
    }
}

#[test]
fn page_items_stay_within_page_bounds() {
    let mut engine = engine_with(numbered(23));
    engine.sort(SortField::Price, SortOrder::Descending);

    for size in [1usize, 3, 5, 10, 23, 50] {
        engine.set_page_size(size);
        let matched = ids(&engine.matched());
        for page in 1..=engine.total_pages() {
            assert!(engine.go_to_page(page as i64));
            let items = ids(&engine.current_page_items());
            let start = (page - 1) * size;
            let end = (page * size).min(matched.len());
            assert!(items.len() <= size);
            assert_eq!(items, matched[start..end].to_vec());
        }
    }
}

#[test]
fn end_to_end_fruit_catalog() {
    let mut engine = engine_with(twelve_fruits());
    assert_eq!(engine.query().page_size, 10);

    engine.search("a");
    assert_eq!(engine.matched_len(), 12);

    engine.sort(SortField::Price, SortOrder::Ascending);
    assert_eq!(
        ids(&engine.matched()),
        vec![9, 12, 2, 5, 1, 4, 8, 6, 3, 10, 7, 11]
    );
    assert_eq!(engine.total_pages(), 2);

    assert!(engine.go_to_page(2));
    assert_eq!(titles(&engine.current_page_items()), vec!["Avocado", "Watermelon"]);
    assert_eq!(
        engine.results_summary(),
        ResultsSummary::Range {
            start: 11,
            end: 12,
            total: 12
        }
    );

    engine.set_page_size(5);
    assert_eq!(engine.query().page, 1);
    assert_eq!(engine.total_pages(), 3);
    assert_eq!(ids(&engine.current_page_items()), vec![9, 12, 2, 5, 1]);
    assert_eq!(
        engine.pagination_window(),
        vec![PageLink::Page(1), PageLink::Page(2), PageLink::Page(3)]
    );
}

#[test]
fn pagination_window_for_twenty_pages() {
    let mut engine = engine_with(numbered(200));
    assert!(engine.go_to_page(10));

    assert_eq!(
        engine.pagination_window(),
        vec![
            PageLink::Page(1),
            PageLink::Ellipsis,
            PageLink::Page(8),
            PageLink::Page(9),
            PageLink::Page(10),
            PageLink::Page(11),
            PageLink::Page(12),
            PageLink::Ellipsis,
            PageLink::Page(20),
        ]
    );
}

#[test]
fn duplicate_ids_pass_through() {
    let engine = engine_with(vec![Record::new(1, "Same", 1.0), Record::new(1, "Same", 1.0)]);
    assert_eq!(engine.matched_len(), 2);
}
