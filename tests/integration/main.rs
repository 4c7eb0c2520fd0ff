//! Integration tests for pagekit.

mod helpers;
mod paginator_test;
mod resolver_test;
mod window_test;
