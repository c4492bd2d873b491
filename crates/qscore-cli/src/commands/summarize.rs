//! The `qscore summarize` command.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use qscore_core::model::ScoreCategory;
use qscore_core::parser;
use qscore_core::statistics::{summarize, AggregateStats};

use crate::config::load_config_from;

#[derive(Serialize)]
struct SetSummary<'a> {
    name: &'a str,
    #[serde(flatten)]
    stats: AggregateStats,
}

pub fn execute(input: PathBuf, format: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or(config.default_format);

    let sets = parser::load_results(&input)?;
    let summaries: Vec<SetSummary<'_>> = sets
        .iter()
        .map(|set| SetSummary {
            name: &set.name,
            stats: summarize(&set.questions),
        })
        .collect();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        "markdown" | "md" => {
            println!("{}", to_markdown(&summaries));
        }
        "text" => {
            for summary in &summaries {
                print_text(summary);
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected text, json or markdown)"),
    }

    Ok(())
}

fn print_text(summary: &SetSummary<'_>) {
    use comfy_table::{Cell, Table};

    println!("{}", summary.name);
    if summary.stats.is_empty() {
        println!("No interview data found.\n");
        return;
    }

    let mut header = vec!["Total".to_string()];
    header.extend(
        ScoreCategory::ALL
            .iter()
            .map(|c| c.style().stat_label.to_string()),
    );
    header.push("Avg Time".to_string());

    let mut row = vec![Cell::new(summary.stats.total)];
    row.extend(summary.stats.counts().map(|(_, n)| Cell::new(n)));
    row.push(Cell::new(format!("{}s", summary.stats.avg_time)));

    let mut table = Table::new();
    table.set_header(header);
    table.add_row(row);

    println!("{table}\n");
}

fn to_markdown(summaries: &[SetSummary<'_>]) -> String {
    let mut md = String::new();

    md.push_str("| Result set | Total |");
    for category in ScoreCategory::ALL {
        md.push_str(&format!(" {} |", category.style().stat_label));
    }
    md.push_str(" Avg Time |\n");
    md.push_str("|------------|-------|");
    for _ in ScoreCategory::ALL {
        md.push_str("------|");
    }
    md.push_str("----------|\n");

    for summary in summaries {
        md.push_str(&format!("| {} | {} |", summary.name, summary.stats.total));
        for (_, count) in summary.stats.counts() {
            md.push_str(&format!(" {count} |"));
        }
        md.push_str(&format!(" {}s |\n", summary.stats.avg_time));
    }

    md
}
