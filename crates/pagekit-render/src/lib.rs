//! # pagekit-render
//!
//! Turns page window plans from `pagekit-core` into HTML. URLs for the
//! individual pages come from a [`LinkResolver`], either a caller supplied
//! function or one derived from the inbound HTTP request.

pub mod markup;
pub mod paginator;
pub mod resolver;

pub use pagekit_core::config::pagination::PaginatorOptions;
pub use paginator::{Paginator, PaginatorBuilder};
pub use resolver::{FunctionResolver, LinkResolver, LinkSource, RequestDerivedResolver};
