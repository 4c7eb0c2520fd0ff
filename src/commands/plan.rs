//! Plan command: shows how the page window was laid out.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use pagekit_core::config::AppConfig;
use pagekit_core::error::AppError;
use pagekit_core::result::AppResult;
use pagekit_core::types::{PageLink, PageWindowPlan, PaginationRequest};

use super::PageArgs;

/// Arguments for the plan command
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Page position
    #[command(flatten)]
    pub position: PageArgs,
}

/// Link display row for table output
#[derive(Debug, Serialize, Tabled)]
struct LinkRow {
    /// Position in the control
    position: usize,
    /// Item kind
    kind: String,
    /// Target page
    page: String,
    /// Item state
    state: String,
}

impl LinkRow {
    fn new(position: usize, link: &PageLink) -> Self {
        let state = if link.is_active() {
            "active"
        } else if link.is_disabled() {
            "disabled"
        } else {
            ""
        };

        Self {
            position,
            kind: link.kind_name().to_string(),
            page: link.page().map(|p| p.to_string()).unwrap_or_else(|| "...".to_string()),
            state: state.to_string(),
        }
    }
}

/// Plan and links for JSON output
#[derive(Debug, Serialize)]
struct PlanReport {
    /// The computed window
    plan: PageWindowPlan,
    /// Items of the control in display order
    links: Vec<PageLink>,
}

/// Compute the page window described by the command-line arguments.
pub fn build_plan(args: &PlanArgs, config: &AppConfig) -> AppResult<PageWindowPlan> {
    let options = args.position.options(config);
    options.validate()?;

    let request = PaginationRequest::with_max_pages(
        args.position.page,
        args.position.rows_per_page,
        args.position.total_rows,
        options.max_pages_to_show,
    )?;
    Ok(request.plan())
}

/// Execute the plan command
pub fn execute(args: &PlanArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let plan = build_plan(args, config)?;
    let links = plan.links();

    match format {
        OutputFormat::Json => output::print_json(&PlanReport { plan, links })?,
        OutputFormat::Table => {
            output::print_kv("Total pages", &plan.total_pages.to_string());
            output::print_kv("Current page", &plan.current_page.to_string());
            output::print_kv(
                "Window",
                &format!("{}..={}", plan.window_start, plan.window_end),
            );
            output::print_kv("Show all", &plan.show_all.to_string());

            let rows: Vec<LinkRow> = links
                .iter()
                .enumerate()
                .map(|(i, link)| LinkRow::new(i + 1, link))
                .collect();
            output::print_table(&rows);
        }
    }

    Ok(())
}
