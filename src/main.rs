//! chart-vendor CLI
//!
//! Usage: chart-vendor [OPTIONS] [CHART]...
//!
//! Vendors every chart in `.charts.yml` (or only the named ones) into
//! `charts/`, then optionally checks that the working tree is clean.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use chart_vendor::application::VendorOptions;
use chart_vendor::config::{load_manifest, load_settings};
use chart_vendor::presentation::output::{self, OutputFormat, RunSummary};
use chart_vendor::presentation::terminal::{detect_capabilities, TerminalCapabilities};
use chart_vendor::presentation::{factory, Cli};

fn init_tracing(verbose: u8, ansi: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chart_vendor={default_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    let caps = detect_capabilities();
    init_tracing(cli.verbose, caps.color_logs());

    if let Err(err) = run(&cli, &caps) {
        output::print_error(&err, cli.json, &caps);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, caps: &TerminalCapabilities) -> Result<()> {
    let settings = cli.apply(load_settings()?)?;

    let parsed = load_manifest(&cli.config_file)?;
    for warning in &parsed.warnings {
        warn!(key = %warning.key, file = %warning.file.display(), "unknown manifest key ignored");
    }

    let sink = factory::create_event_sink(cli.json, caps.supports_unicode, cli.verbose);
    let use_case = factory::create_vendor_use_case(&settings)?;
    let options = VendorOptions::new(&cli.charts_root)
        .with_selection(cli.charts.clone())
        .with_strict_selection(cli.strict_selection)
        .with_lock_file_name(settings.lock_file_name.as_str());

    let report = use_case.execute(&parsed.manifest, &options, sink.as_ref())?;

    if cli.check {
        factory::create_drift_checker()
            .check_with_events(Path::new("."), sink.as_ref())?
            .into_result()?;
    }

    let summary = RunSummary {
        report: &report,
        charts_root: &cli.charts_root,
        checked: cli.check,
    };
    output::create_renderer(OutputFormat::from_json_flag(cli.json), caps.supports_unicode)
        .render(&summary, &mut std::io::stdout().lock())?;
    Ok(())
}
