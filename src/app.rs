//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the fetch → shape pipeline
//! - prints the summary/plot or launches the TUI
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, FetchArgs, PlotArgs};
use crate::domain::{ChartSpec, FetchConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `covid` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();

    // We want bare `covid` to behave like `covid tui`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fetch(args) => handle_fetch(args),
        Command::Plot(args) => handle_plot(args),
        Command::Tui => crate::tui::run(),
    }
}

fn init_logging() {
    // RUST_LOG tunes verbosity; the default keeps the terminal clean.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

fn handle_fetch(args: FetchArgs) -> Result<(), AppError> {
    let config = fetch_config_from_args(&args);
    let client = crate::data::DiseaseShClient::new();
    let run = pipeline::run_fetch(&client)?;

    println!(
        "{}",
        crate::report::format_run_summary(&run.timeline, &run.stats)
    );
    println!("{}", crate::report::format_latest_table(&run.timeline, 7));

    if config.plot {
        let spec = ChartSpec::from_timeline(&run.timeline);
        println!(
            "{}",
            crate::plot::render_ascii_plot(&spec, config.plot_width, config.plot_height)
        );
    }

    // Optional exports.
    if let Some(path) = &config.export_json {
        crate::io::write_timeline_json(path, &run.timeline, &client.endpoint())?;
    }
    if let Some(path) = &config.export_csv {
        crate::io::write_timeline_csv(path, &run.timeline)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let saved = crate::io::read_timeline_json(&args.timeline)?;
    let spec = ChartSpec::from_timeline(&saved.timeline);

    println!(
        "{}",
        crate::plot::render_ascii_plot(&spec, args.width, args.height)
    );
    Ok(())
}

pub fn fetch_config_from_args(args: &FetchArgs) -> FetchConfig {
    FetchConfig {
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_json: args.export.clone(),
        export_csv: args.export_csv.clone(),
    }
}

/// Rewrite argv so `covid` defaults to `covid tui`.
///
/// Rules:
/// - `covid`                      -> `covid tui`
/// - `covid --help/--version/-h`  -> unchanged (show top-level help/version)
/// - anything else               -> unchanged (clap reports its own errors)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    if argv.len() <= 1 {
        argv.push("tui".to_string());
    }
    argv
}
