//! Command-line parsing for the disease.sh timeline viewer.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the fetch/shape code.
//!
//! The endpoint, country, and 30-day window are fixed constants of the data
//! layer; every flag here is presentation-only.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "covid", version, about = "30-day COVID-19 timeline charts (disease.sh)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the timeline, print a summary, and render a terminal plot.
    Fetch(FetchArgs),
    /// Plot a previously exported timeline JSON (no network access).
    Plot(PlotArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying fetch pipeline as `covid fetch`, but
    /// renders the chart in a terminal UI using Ratatui. Sizing follows the
    /// terminal, so the plot flags don't apply here.
    Tui,
}

/// Common options for fetching.
#[derive(Debug, Parser, Clone)]
pub struct FetchArgs {
    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the shaped timeline to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the shaped timeline to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,
}

/// Options for plotting a saved timeline.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Timeline JSON file produced by `covid fetch --export`.
    #[arg(long, value_name = "JSON")]
    pub timeline: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
