//! Pagination request derived from row counts.

use serde::{Deserialize, Serialize};

use crate::config::pagination::DEFAULT_MAX_PAGES_TO_SHOW;
use crate::error::AppError;
use crate::types::window::{PageWindowCalculator, PageWindowPlan};

/// Inputs of a pagination control: where the reader is and how many rows exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Page number (1-based) as requested by the caller.
    pub current_page: u64,
    /// Number of rows per page.
    pub rows_per_page: u64,
    /// Total number of rows across all pages.
    pub total_row_count: u64,
    /// Maximum number of page slots in the control.
    #[serde(default = "default_max_pages_to_show")]
    pub max_pages_to_show: u64,
}

impl PaginationRequest {
    /// Create a new request with the default slot count.
    ///
    /// Fails when `rows_per_page` is zero.
    pub fn new(current_page: u64, rows_per_page: u64, total_row_count: u64) -> Result<Self, AppError> {
        Self::with_max_pages(
            current_page,
            rows_per_page,
            total_row_count,
            DEFAULT_MAX_PAGES_TO_SHOW,
        )
    }

    /// Create a new request with an explicit slot count.
    pub fn with_max_pages(
        current_page: u64,
        rows_per_page: u64,
        total_row_count: u64,
        max_pages_to_show: u64,
    ) -> Result<Self, AppError> {
        if rows_per_page == 0 {
            return Err(AppError::invalid_input("rows_per_page must be at least 1"));
        }
        if max_pages_to_show == 0 {
            return Err(AppError::invalid_input(
                "max_pages_to_show must be at least 1",
            ));
        }

        Ok(Self {
            current_page,
            rows_per_page,
            total_row_count,
            max_pages_to_show,
        })
    }

    /// Total number of pages; never less than 1.
    pub fn total_pages(&self) -> u64 {
        self.total_row_count
            .div_ceil(self.rows_per_page.max(1))
            .max(1)
    }

    /// Whether the rows span more than one page.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages() > 1
    }

    /// Whether a page exists before the current one.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a page exists after the current one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Index of the first row on the current page.
    pub fn offset(&self) -> u64 {
        self.current_page.saturating_sub(1) * self.rows_per_page
    }

    /// Number of rows a page holds.
    pub fn limit(&self) -> u64 {
        self.rows_per_page
    }

    /// Compute the page window for this request.
    pub fn plan(&self) -> PageWindowPlan {
        PageWindowCalculator::compute(self.current_page, self.total_pages(), self.max_pages_to_show)
    }
}

fn default_max_pages_to_show() -> u64 {
    DEFAULT_MAX_PAGES_TO_SHOW
}
