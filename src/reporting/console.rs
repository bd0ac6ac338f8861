// src/reporting/console.rs
//! Grouped text rendering.
//!
//! One header line per module, type lines one level down, method lines two
//! levels down. Indentation is two spaces per level. Color degrades to
//! plain text off-tty or when disabled.

use crate::reporting::Report;
use colored::Colorize;

const INDENT: &str = "  ";

/// Renders the report as grouped text.
#[must_use]
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    for module in &report.modules {
        out.push_str(&format!("{}\n", format!("module {}", module.module).bold()));
        for ty in &module.types {
            let tag = if ty.tag == "public" {
                ty.tag.green()
            } else {
                ty.tag.yellow()
            };
            out.push_str(&format!("{INDENT}{} ({tag})\n", ty.name));
            for m in &ty.methods {
                let marker = if m.is_static {
                    format!("{} ", "static".dimmed())
                } else {
                    String::new()
                };
                out.push_str(&format!(
                    "{INDENT}{INDENT}{marker}{} {} : {}\n",
                    m.visibility.cyan(),
                    m.name,
                    m.returns
                ));
            }
        }
    }
    out
}

/// Prints the rendered report to stdout.
pub fn print(report: &Report) {
    print!("{}", render(report));
}
