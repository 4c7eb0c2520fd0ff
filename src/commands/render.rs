//! Render command: prints the markup of a pagination control.

use clap::Args;

use pagekit_core::config::AppConfig;
use pagekit_core::error::AppError;
use pagekit_core::result::AppResult;
use pagekit_render::{Paginator, RequestDerivedResolver};

use super::PageArgs;

/// Placeholder replaced with the page number in URL templates
const PAGE_PLACEHOLDER: &str = "{page}";

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page position
    #[command(flatten)]
    pub position: PageArgs,

    /// URL template, `{page}` is replaced with the page number
    #[arg(long, conflicts_with = "request_uri")]
    pub url_template: Option<String>,

    /// Current request URI; links keep its path and query and override `page`
    #[arg(long)]
    pub request_uri: Option<String>,

    /// CSS class of the container
    #[arg(long)]
    pub class: Option<String>,

    /// Description paragraph
    #[arg(long)]
    pub description: Option<String>,

    /// Show the description even for a single page
    #[arg(long)]
    pub always_show_description: bool,
}

/// Execute the render command
pub fn execute(args: &RenderArgs, config: &AppConfig) -> Result<(), AppError> {
    let paginator = build_paginator(args, config)?;
    tracing::info!(
        current_page = paginator.current_page(),
        total_pages = paginator.total_pages(),
        "Rendering pagination control"
    );

    println!("{paginator}");
    Ok(())
}

/// Build the paginator described by the command-line arguments.
///
/// Fails with an invalid-input error when neither a URL template nor a request URI is given.
pub fn build_paginator(args: &RenderArgs, config: &AppConfig) -> AppResult<Paginator> {
    let mut options = args.position.options(config);
    if let Some(class) = &args.class {
        options = options.with_container_css_class(class.clone());
    }
    if let Some(description) = &args.description {
        options = options.with_description(description.clone());
    }
    if args.always_show_description {
        options = options.with_always_show_description(true);
    }

    let mut builder = Paginator::builder(
        args.position.page,
        args.position.rows_per_page,
        args.position.total_rows,
    )
    .options(options);

    if let Some(template) = args.url_template.clone() {
        builder = builder.url_generator(move |page| template.replace(PAGE_PLACEHOLDER, &page.to_string()));
    }
    if let Some(uri) = &args.request_uri {
        builder = builder.link_source(RequestDerivedResolver::parse(uri)?);
    }

    builder.build()
}
