//! Link resolver tests against real HTTP request values.

use std::sync::Arc;

use http::Request;

use pagekit_core::config::pagination::PaginatorOptions;
use pagekit_render::{LinkResolver, LinkSource, Paginator, RequestDerivedResolver};

struct SlugResolver;

impl LinkResolver for SlugResolver {
    fn resolve(&self, page: u64) -> String {
        format!("/archive/page-{page}/")
    }
}

#[test]
fn test_request_query_is_preserved() {
    let request = Request::builder()
        .uri("https://shop.example.com/products?category=shoes&page=3&sort=price")
        .body(())
        .unwrap();
    let paginator = Paginator::builder(3, 20, 200)
        .request(&request)
        .build()
        .unwrap();

    assert_eq!(
        paginator.url(4),
        "/products?category=shoes&amp;page=4&amp;sort=price"
    );
    assert!(paginator
        .to_html()
        .contains(r#"href="/products?category=shoes&amp;page=1&amp;sort=price""#));
}

#[test]
fn test_request_query_encoding() {
    let resolver = RequestDerivedResolver::new(
        "/search",
        vec![("q".to_string(), "red shoes/boots".to_string())],
    );
    assert_eq!(resolver.resolve(2), "/search?q=red+shoes%2Fboots&amp;page=2");
}

#[test]
fn test_custom_resolver() {
    let paginator = Paginator::new(
        1,
        10,
        30,
        LinkSource::Custom(Arc::new(SlugResolver)),
        PaginatorOptions::default(),
    )
    .unwrap();

    assert!(paginator.to_html().contains(r#"href="/archive/page-3/""#));
}
