//! Shared test helpers for integration tests.

use http::Request;

use pagekit_core::config::pagination::PaginatorOptions;
use pagekit_render::Paginator;

/// Request for the site root, the way a front controller would see it.
pub fn root_request() -> Request<()> {
    Request::builder()
        .uri("http://www.example.org")
        .body(())
        .expect("Failed to build request")
}

/// Paginator deriving its links from [`root_request`].
pub fn request_paginator(
    current_page: u64,
    rows_per_page: u64,
    total_rows: u64,
    options: PaginatorOptions,
) -> Paginator {
    Paginator::builder(current_page, rows_per_page, total_rows)
        .request(&root_request())
        .options(options)
        .build()
        .expect("Failed to build paginator")
}

/// Number of list items in rendered markup.
pub fn count_items(html: &str) -> usize {
    html.matches("<li").count()
}
