//! Core type definitions used across the pagekit workspace.

pub mod link;
pub mod pagination;
pub mod window;

pub use link::{GapSide, PageLink};
pub use pagination::PaginationRequest;
pub use window::{MAX_TOTAL_PAGES, PageWindowCalculator, PageWindowPlan};
