//! The `qscore report` command.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};

use qscore_core::parser;
use qscore_core::report::AnalysisReport;

use crate::config::load_config_from;

use super::resolve_filter;

pub fn execute(
    input: PathBuf,
    filter: Option<String>,
    format: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let filter = resolve_filter(filter.as_deref(), config.default_filter)?;
    let output = output.unwrap_or(config.output_dir);

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "markdown"]
    } else {
        format.split(',').map(str::trim).collect()
    };
    for fmt in &formats {
        anyhow::ensure!(
            matches!(*fmt, "json" | "markdown" | "md"),
            "unknown format: {fmt} (expected json, markdown or all)"
        );
    }

    let sets = parser::load_results(&input)?;
    anyhow::ensure!(!sets.is_empty(), "no result files found in {}", input.display());

    std::fs::create_dir_all(&output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
    let mut used_stems = HashSet::new();

    for set in &sets {
        let report = AnalysisReport::build(set, filter);
        let stem = unique_stem(
            format!("report-{}-{timestamp}", file_safe(&set.name)),
            &mut used_stems,
        );

        for fmt in &formats {
            match *fmt {
                "json" => {
                    let path = output.join(format!("{stem}.json"));
                    report.save_json(&path)?;
                    tracing::info!("JSON report: {}", path.display());
                    println!("Results saved to: {}", path.display());
                }
                _ => {
                    let path = output.join(format!("{stem}.md"));
                    std::fs::write(&path, report.to_markdown())
                        .with_context(|| format!("failed to write report to {}", path.display()))?;
                    tracing::info!("markdown report: {}", path.display());
                    println!("Markdown report: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Suffix `base` with `-2`, `-3`, ... until it has not been used in this run.
fn unique_stem(base: String, used: &mut HashSet<String>) -> String {
    let mut stem = base.clone();
    let mut n = 1;
    while !used.insert(stem.clone()) {
        n += 1;
        stem = format!("{base}-{n}");
    }
    stem
}

fn file_safe(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let trimmed = cleaned.trim_matches('-');
    if trimmed.is_empty() {
        "results".to_string()
    } else {
        trimmed.to_string()
    }
}
