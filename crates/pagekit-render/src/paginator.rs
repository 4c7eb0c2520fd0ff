//! Pagination control renderer.

use std::fmt;
use std::sync::Arc;

use http::Request;

use pagekit_core::config::pagination::PaginatorOptions;
use pagekit_core::error::AppError;
use pagekit_core::result::AppResult;
use pagekit_core::types::{PageLink, PageWindowPlan, PaginationRequest};

use crate::markup;
use crate::resolver::{LinkResolver, LinkSource};

/// A configured pagination control, ready to render.
///
/// All inputs are fixed at construction; rendering never mutates the
/// paginator, so it can be shared across threads.
#[derive(Clone)]
pub struct Paginator {
    request: PaginationRequest,
    plan: PageWindowPlan,
    options: PaginatorOptions,
    resolver: Arc<dyn LinkResolver>,
}

impl Paginator {
    /// Create a paginator for `current_page` of `total_row_count` rows split
    /// into pages of `rows_per_page`.
    pub fn new(
        current_page: u64,
        rows_per_page: u64,
        total_row_count: u64,
        link_source: LinkSource,
        options: PaginatorOptions,
    ) -> AppResult<Self> {
        options.validate()?;
        let request = PaginationRequest::with_max_pages(
            current_page,
            rows_per_page,
            total_row_count,
            options.max_pages_to_show,
        )?;
        let plan = request.plan();

        tracing::debug!(
            current_page = plan.current_page,
            total_pages = plan.total_pages,
            window_start = plan.window_start,
            window_end = plan.window_end,
            "Paginator created"
        );

        Ok(Self {
            request,
            plan,
            options,
            resolver: link_source.into_resolver(),
        })
    }

    /// Start a builder; a link source must be supplied before `build`.
    pub fn builder(current_page: u64, rows_per_page: u64, total_row_count: u64) -> PaginatorBuilder {
        PaginatorBuilder {
            current_page,
            rows_per_page,
            total_row_count,
            link_source: None,
            options: PaginatorOptions::default(),
        }
    }

    /// The computed page window.
    pub fn plan(&self) -> &PageWindowPlan {
        &self.plan
    }

    /// The validated request the window was computed from.
    pub fn request(&self) -> &PaginationRequest {
        &self.request
    }

    /// The rendering options.
    pub fn options(&self) -> &PaginatorOptions {
        &self.options
    }

    /// Items of the control in display order.
    pub fn links(&self) -> Vec<PageLink> {
        self.plan.links()
    }

    /// Current page after clamping into range.
    pub fn current_page(&self) -> u64 {
        self.plan.current_page
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> u64 {
        self.plan.total_pages
    }

    /// Whether there is more than one page.
    pub fn has_multiple_pages(&self) -> bool {
        self.plan.has_multiple_pages()
    }

    /// URL of `page` according to the configured link source.
    pub fn url(&self, page: u64) -> String {
        self.resolver.resolve(page)
    }

    /// Render the control as HTML.
    pub fn to_html(&self) -> String {
        markup::render(&self.plan, &self.options, self.resolver.as_ref())
    }
}

impl fmt::Display for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("request", &self.request)
            .field("plan", &self.plan)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Step-by-step construction of a [`Paginator`].
#[derive(Debug)]
pub struct PaginatorBuilder {
    current_page: u64,
    rows_per_page: u64,
    total_row_count: u64,
    link_source: Option<LinkSource>,
    options: PaginatorOptions,
}

impl PaginatorBuilder {
    /// Generate page URLs with a closure.
    #[must_use]
    pub fn url_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn(u64) -> String + Send + Sync + 'static,
    {
        self.link_source = Some(LinkSource::function(generator));
        self
    }

    /// Derive page URLs from the inbound request.
    #[must_use]
    pub fn request<B>(mut self, request: &Request<B>) -> Self {
        self.link_source = Some(LinkSource::request(request));
        self
    }

    /// Use an explicit link source.
    #[must_use]
    pub fn link_source(mut self, link_source: impl Into<LinkSource>) -> Self {
        self.link_source = Some(link_source.into());
        self
    }

    /// Replace the rendering options.
    #[must_use]
    pub fn options(mut self, options: PaginatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the paginator.
    ///
    /// Fails with an invalid-input error when no link source was supplied.
    pub fn build(self) -> AppResult<Paginator> {
        let link_source = self.link_source.ok_or_else(|| {
            AppError::invalid_input("Either a request or a url generator must be supplied")
        })?;

        Paginator::new(
            self.current_page,
            self.rows_per_page,
            self.total_row_count,
            link_source,
            self.options,
        )
    }
}
