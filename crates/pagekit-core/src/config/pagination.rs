//! Pagination rendering options.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default number of page slots in a control (odd, so the current page can sit in the middle).
pub const DEFAULT_MAX_PAGES_TO_SHOW: u64 = 9;
/// Default CSS class of the container element.
pub const DEFAULT_CONTAINER_CSS_CLASS: &str = "pagination";

/// Smallest slot count for which the window always contains the current
/// page and fills the control exactly.
const MIN_BALANCED_PAGES_TO_SHOW: u64 = 5;

/// Immutable rendering options for a pagination control.
///
/// Options are built once, either deserialized from configuration or with
/// the `with_*` methods, and never mutated after a paginator is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorOptions {
    /// Maximum number of page slots (numbers and gap markers) to show.
    #[serde(default = "default_max_pages_to_show")]
    pub max_pages_to_show: u64,
    /// CSS class of the outer container.
    #[serde(default = "default_container_css_class")]
    pub container_css_class: String,
    /// Optional description paragraph, e.g. "Showing 1-10 of 200".
    #[serde(default)]
    pub description: Option<String>,
    /// Show the description even when there is only a single page.
    #[serde(default)]
    pub always_show_description: bool,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
            container_css_class: DEFAULT_CONTAINER_CSS_CLASS.to_string(),
            description: None,
            always_show_description: false,
        }
    }
}

impl PaginatorOptions {
    /// Set the maximum number of page slots.
    #[must_use]
    pub fn with_max_pages_to_show(mut self, max_pages_to_show: u64) -> Self {
        self.max_pages_to_show = max_pages_to_show;
        self
    }

    /// Set the container CSS class.
    #[must_use]
    pub fn with_container_css_class(mut self, class: impl Into<String>) -> Self {
        self.container_css_class = class.into();
        self
    }

    /// Set the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Show the description on single-page controls too.
    #[must_use]
    pub fn with_always_show_description(mut self, always: bool) -> Self {
        self.always_show_description = always;
        self
    }

    /// Check the options before they are used for rendering.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_pages_to_show == 0 {
            return Err(AppError::invalid_input(
                "max_pages_to_show must be at least 1",
            ));
        }

        if self.container_css_class.trim().is_empty() {
            return Err(AppError::invalid_input(
                "container_css_class must not be empty",
            ));
        }

        if self.max_pages_to_show % 2 == 0 || self.max_pages_to_show < MIN_BALANCED_PAGES_TO_SHOW {
            tracing::warn!(
                max_pages_to_show = self.max_pages_to_show,
                "max_pages_to_show should be an odd number of at least {}",
                MIN_BALANCED_PAGES_TO_SHOW
            );
        }

        Ok(())
    }
}

fn default_max_pages_to_show() -> u64 {
    DEFAULT_MAX_PAGES_TO_SHOW
}

fn default_container_css_class() -> String {
    DEFAULT_CONTAINER_CSS_CLASS.to_string()
}
