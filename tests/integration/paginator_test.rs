//! Rendering tests for complete pagination controls.

use pagekit_core::config::pagination::PaginatorOptions;
use pagekit_render::{LinkSource, Paginator};

use crate::helpers::{count_items, request_paginator};

#[test]
fn test_missing_link_source_is_invalid_input() {
    let err = Paginator::builder(1, 10, 10).build().unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_single_page() {
    let options = PaginatorOptions::default()
        .with_description("Showing 1 result of 10")
        .with_container_css_class("test-css-class")
        .with_always_show_description(true);
    let paginator = request_paginator(1, 10, 10, options);
    let html = paginator.to_html();

    assert!(html.contains("<div"));
    assert_eq!(count_items(&html), 0);
    assert!(html.contains("</div>"));
    assert!(html.contains("Showing 1"));
    assert!(html.contains(r#"class="test-css-class single-page""#));
    assert!(!paginator.has_multiple_pages());
}

#[test]
fn test_description_hidden_on_single_page_by_default() {
    let options = PaginatorOptions::default().with_description("Showing 1 result of 10");
    let html = request_paginator(1, 10, 10, options).to_html();
    assert!(!html.contains("<p>"));
}

#[test]
fn test_description_shown_on_multiple_pages() {
    let options = PaginatorOptions::default().with_description("Showing 1-10 of 20");
    let html = request_paginator(1, 10, 20, options).to_html();
    assert!(html.contains(r#"<div class="pagination multiple-pages"><p>Showing 1-10 of 20</p><ul>"#));
}

#[test]
fn test_no_rows_is_single_page() {
    let paginator = request_paginator(1, 10, 0, PaginatorOptions::default());
    assert_eq!(paginator.total_pages(), 1);
    assert_eq!(count_items(&paginator.to_html()), 0);
}

#[test]
fn test_display() {
    let paginator = request_paginator(1, 10, 20, PaginatorOptions::default());
    assert!(paginator.to_string().contains("<div"));
}

#[test]
fn test_list_items_count() {
    let html = request_paginator(1, 10, 100, PaginatorOptions::default()).to_html();
    assert_eq!(count_items(&html), 11);
}

#[test]
fn test_max_pages() {
    let options = PaginatorOptions::default().with_max_pages_to_show(5);
    let html = request_paginator(1, 10, 100, options).to_html();
    assert_eq!(count_items(&html), 7);
}

#[test]
fn test_list_items_count_with_last_page() {
    let html = request_paginator(9, 10, 90, PaginatorOptions::default()).to_html();
    assert_eq!(count_items(&html), 11);
    assert!(!html.contains("gap"));
}

#[test]
fn test_list_items_count_with_many_rows() {
    let html = request_paginator(9, 10, 200, PaginatorOptions::default()).to_html();
    assert_eq!(count_items(&html), 11);
    assert_eq!(html.matches(r#"class="disabled gap""#).count(), 2);
}

#[test]
fn test_list_items_count_near_the_end() {
    let paginator = request_paginator(17, 10, 200, PaginatorOptions::default());
    let html = paginator.to_html();

    assert_eq!(paginator.total_pages(), 20);
    assert_eq!(count_items(&html), 11);
    assert!(paginator.plan().left_gap);
    assert!(!paginator.plan().right_gap);
    assert_eq!(html.matches(r#"class="disabled gap""#).count(), 1);
}

#[test]
fn test_url_generator() {
    let paginator = Paginator::new(
        1,
        10,
        20,
        LinkSource::function(|page| format!("http://example.org/some-page.html?page={page}")),
        PaginatorOptions::default(),
    )
    .unwrap();
    let html = paginator.to_html();

    assert!(html.contains(r#"href="http://example.org/some-page.html?page=1""#));
    assert!(html.contains(r#"href="http://example.org/some-page.html?page=2""#));
}

#[test]
fn test_request_links() {
    let html = request_paginator(2, 10, 30, PaginatorOptions::default()).to_html();

    assert!(html.contains(r#"<li class="previous"><a href="/?page=1">&laquo;</a></li>"#));
    assert!(html.contains(r#"<li class="active"><a href="/?page=2">2</a></li>"#));
    assert!(html.contains(r#"<li class="next"><a href="/?page=3">&raquo;</a></li>"#));
}

#[test]
fn test_navigation_disabled_at_edges() {
    let first = request_paginator(1, 10, 30, PaginatorOptions::default()).to_html();
    assert!(first.contains(r#"<li class="previous disabled"><span>&laquo;</span></li>"#));
    assert!(first.contains(r#"<li class="next"><a"#));

    let last = request_paginator(3, 10, 30, PaginatorOptions::default()).to_html();
    assert!(last.contains(r#"<li class="previous"><a"#));
    assert!(last.contains(r#"<li class="next disabled"><span>&raquo;</span></li>"#));
}

#[test]
fn test_zero_max_pages_is_rejected() {
    let err = Paginator::builder(1, 10, 100)
        .url_generator(|page| page.to_string())
        .options(PaginatorOptions::default().with_max_pages_to_show(0))
        .build()
        .unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_paginator_renders_from_other_threads() {
    let paginator = request_paginator(4, 10, 200, PaginatorOptions::default());
    let expected = paginator.to_html();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let paginator = paginator.clone();
            std::thread::spawn(move || paginator.to_html())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
