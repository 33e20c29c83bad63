//! Shared output options and terminal helpers for subcommands
use crate::core::config::ReportConfig;
use crate::report::{Format, ReportGenerator, ReportOptions, Reportable};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: text, csv, tsv or json (overrides config)
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Print at most N rows (0 = unlimited, overrides config)
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Omit the summary line after text tables
    #[arg(long)]
    pub no_summary: bool,
}

impl OutputArgs {
    /// Config values with command-line overrides applied
    pub fn options(&self, config: &ReportConfig) -> ReportOptions {
        let mut options = ReportOptions::from(config);
        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(limit) = self.limit {
            options.max_rows = limit;
        }
        if self.no_summary {
            options.show_summary = false;
        }
        options
    }

    pub fn print<R: Reportable>(&self, config: &ReportConfig, rows: &[R]) -> crate::Result<()> {
        let report = ReportGenerator::new(self.options(config)).generate(rows)?;
        print!("{}", report);
        if !report.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}

/// Spinner on stderr; indicatif hides it when stderr is not a terminal
pub fn loading_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Run a loader behind a spinner, clearing it whatever the outcome
pub fn with_spinner<T>(message: String, load: impl FnOnce() -> crate::Result<T>) -> crate::Result<T> {
    let spinner = loading_spinner(message);
    let result = load();
    spinner.finish_and_clear();
    result
}
