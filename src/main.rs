use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use shapes::cli::{CliArgs, CommonArgs, PairArgs};
use shapes::config::LoadedConfig;
use shapes::error::ShapesError;
use shapes::geometry::DimensionPolicy;
use shapes::output::write_json;
use shapes::request::{
    BatchReport, Operation, Outcome, RectangleRequest, Response, evaluate, evaluate_batch,
    read_batch_file, read_request_file,
};

/// Exit status for rejected input
const EXIT_BAD_REQUEST: i32 = 2;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<ShapesError>() {
        Some(ShapesError::BadRequest(_)) => EXIT_BAD_REQUEST,
        _ => 1,
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let merged = merge_config_with_args(cli.command.common(), cli.command.batch_inputs())?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command.pair() {
        Some((operation, args)) => run_pair(operation, args, &merged),
        None => run_batch(&merged),
    }
}

fn run_pair(operation: Operation, args: &PairArgs, merged: &MergedConfig) -> Result<()> {
    let request = match (&args.request, args.r1, args.r2) {
        (Some(path), _, _) => read_request_file(path)?,
        (None, Some(r1), Some(r2)) => RectangleRequest::new(r1, r2),
        // clap enforces one of the two forms
        _ => anyhow::bail!("either --request or both --r1 and --r2 are required"),
    };

    let response = evaluate(operation, &request, merged.policy).map_err(ShapesError::from)?;
    emit_response(&response, merged.pretty, merged.output.as_deref())
}

/// An empty intersection prints nothing, but an output file still gets
/// `null` so a stale result is never left behind.
fn emit_response(response: &Response, pretty: bool, output: Option<&Path>) -> Result<()> {
    if response.outcome() == Outcome::NoContent {
        info!("Rectangles do not intersect");
        if output.is_none() {
            return Ok(());
        }
    }

    write_json(response, pretty, output)
}

fn run_batch(merged: &MergedConfig) -> Result<()> {
    if merged.requests.is_empty() {
        return Err(ShapesError::NoRequests.into());
    }

    let mut reports = Vec::with_capacity(merged.requests.len());
    for path in &merged.requests {
        let entries = read_batch_file(path)?;
        let report = BatchReport {
            file: path.display().to_string(),
            results: evaluate_batch(&entries, merged.policy),
        };

        let failures = report.failures();
        if failures > 0 {
            warn!(
                "{}: {} of {} entries rejected",
                report.file,
                failures,
                report.results.len()
            );
        }
        info!("Evaluated {} entries from {}", report.results.len(), report.file);

        reports.push(report);
    }

    write_json(&reports, merged.pretty, merged.output.as_deref())?;
    if let Some(output) = &merged.output {
        info!("Saved {}", output.display());
    }

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    requests: Vec<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
    policy: DimensionPolicy,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CommonArgs, inputs: &[PathBuf]) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Batch files: CLI args override config
    let requests = if !inputs.is_empty() {
        inputs.to_vec()
    } else if let Some(ref lc) = loaded_config {
        lc.resolve_requests()
            .context("failed to resolve batch files from config")?
    } else {
        Vec::new()
    };

    // Output file: CLI > config > stdout
    let output = args
        .output
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_output));

    let pretty = if args.pretty {
        true
    } else if let Some(ref lc) = loaded_config {
        lc.config.pretty
    } else {
        false
    };

    let policy = if args.normalize {
        DimensionPolicy::Normalize
    } else if let Some(ref lc) = loaded_config {
        lc.config.dimension_policy
    } else {
        DimensionPolicy::default()
    };

    // Verbose is CLI-only
    let verbose = args.verbose;

    Ok(MergedConfig {
        requests,
        output,
        pretty,
        policy,
        verbose,
    })
}
