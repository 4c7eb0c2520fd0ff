//! CLI command definitions and dispatch.

pub mod plan;
pub mod render;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;
use pagekit_core::config::AppConfig;
use pagekit_core::config::pagination::PaginatorOptions;
use pagekit_core::error::AppError;

/// pagekit — render compact page pickers for paged listings
#[derive(Debug, Parser)]
#[command(name = "pagekit", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the HTML of a pagination control
    Render(render::RenderArgs),
    /// Show the page window and link sequence
    Plan(plan::PlanArgs),
}

/// Position within a paged listing, shared by all commands
#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Current page (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,

    /// Rows shown per page
    #[arg(short, long, default_value_t = 10)]
    pub rows_per_page: u64,

    /// Total number of rows
    #[arg(short, long)]
    pub total_rows: u64,

    /// Maximum number of page slots (overrides configuration)
    #[arg(short, long)]
    pub max_pages: Option<u64>,
}

impl PageArgs {
    /// Configured options with command-line overrides applied.
    pub fn options(&self, config: &AppConfig) -> PaginatorOptions {
        let options = config.pagination.clone();
        match self.max_pages {
            Some(max) => options.with_max_pages_to_show(max),
            None => options,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Render(args) => render::execute(args, config),
            Commands::Plan(args) => plan::execute(args, config, self.format),
        }
    }
}
