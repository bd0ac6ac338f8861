// src/cli/handlers.rs
//! Drives a full listing run: expansion, loading, collection, rendering.

use crate::cli::Cli;
use crate::discovery;
use crate::error::ScopeError;
use crate::metadata::json::JsonProvider;
use crate::metadata::{MetadataProvider, ModuleHandle};
use crate::reporting::{self, Report};
use crate::visibility::Tier;
use anyhow::Result;
use colored::Colorize;

/// Runs a listing.
///
/// Per-argument and per-module problems are reported to stderr and skipped;
/// the run always continues with whatever remains. The worst outcome is an
/// empty report.
///
/// # Errors
/// Returns error only when rendering the final report fails.
pub fn run(cli: &Cli) -> Result<()> {
    let (tier, patterns) = cli.tier_and_patterns();
    if patterns.is_empty() {
        print_usage();
        return Ok(());
    }

    let provider = JsonProvider::new();
    let modules = load_modules(&provider, patterns, cli.verbose);
    let report = build_report(&modules, tier);

    if cli.json {
        println!("{}", reporting::json::render(&report)?);
    } else {
        reporting::console::print(&report);
    }
    Ok(())
}

/// Two-line invocation summary, printed to stdout when no module paths
/// remain after tier resolution. Not an error.
pub fn print_usage() {
    println!("Usage: memberscope [Public|Protected|Private] <module> [<module> ...]");
    println!("       Defaults to \"Public\".");
}

/// Expands every pattern and loads every resulting path, in argument order.
fn load_modules(
    provider: &dyn MetadataProvider,
    patterns: &[String],
    verbose: bool,
) -> Vec<ModuleHandle> {
    let mut modules = Vec::new();
    for pattern in patterns {
        let paths = match discovery::expand(pattern) {
            Ok(paths) => paths,
            Err(e) => {
                report_failure(&e);
                continue;
            }
        };
        if verbose {
            eprintln!(
                "{}",
                format!("{pattern}: {} candidate path(s)", paths.len()).dimmed()
            );
        }
        for path in paths {
            match provider.load(&path) {
                Ok(module) => modules.push(module),
                Err(e) => report_failure(&e),
            }
        }
    }
    modules
}

/// Builds report groups for the loaded modules. A module whose exporter
/// recorded resolution failures is reported cause-by-cause and skipped
/// whole; one bad module never aborts the rest.
#[must_use]
pub fn build_report(modules: &[ModuleHandle], tier: Tier) -> Report {
    let mut report = Report::default();
    for module in modules {
        let failures = module.resolution_failures();
        if !failures.is_empty() {
            for failure in failures {
                report_failure(&ScopeError::Unresolved {
                    module: module.name().to_string(),
                    name: failure.name.clone(),
                    reason: failure.reason.clone(),
                });
            }
            continue;
        }
        if let Some(group) = reporting::module_report(module, tier) {
            report.modules.push(group);
        }
    }
    report
}

fn report_failure(err: &ScopeError) {
    eprintln!("{} {err}", "error:".red().bold());
}
