//! The `qscore list` command.

use std::path::PathBuf;

use anyhow::Result;

use qscore_core::model::{CategoryFilter, InterviewResults};
use qscore_core::parser;
use qscore_core::statistics::categorize;

use crate::config::load_config_from;

use super::resolve_filter;

/// What the listing shows: the active filter and the expanded entry.
struct ListView {
    filter: CategoryFilter,
    expanded: Option<usize>,
}

pub fn execute(
    input: PathBuf,
    filter: Option<String>,
    expand: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let view = ListView {
        filter: resolve_filter(filter.as_deref(), config.default_filter)?,
        expanded: expand,
    };
    if let Some(n) = view.expanded {
        anyhow::ensure!(n >= 1, "--expand is 1-based");
    }

    for set in parser::load_results(&input)? {
        print_set(&set, &view);
    }

    Ok(())
}

fn print_set(set: &InterviewResults, view: &ListView) {
    println!("{} [filter: {}]", set.name, view.filter.label());

    if set.questions.is_empty() {
        println!("No interview data found.\n");
        return;
    }

    // Positions refer to the full set so they stay stable across filters.
    let listed: Vec<_> = set
        .questions
        .iter()
        .enumerate()
        .filter(|(_, q)| view.filter.matches(q.score))
        .collect();

    if listed.is_empty() {
        println!("No questions match filter '{}'.\n", view.filter);
        return;
    }

    for (n, (i, q)) in listed.iter().enumerate() {
        let category = categorize(q.score);
        // Row number drives --expand; #position is the index in the full set.
        println!(
            "  {:>2}. #{:<3} [{}] {:>3}%  {:<17} {}",
            n + 1,
            i + 1,
            category.style().icon,
            q.score,
            category.slug(),
            q.question
        );

        if view.expanded == Some(n + 1) {
            println!("       Your answer: {}", q.your_answer);
            println!("       Feedback:    {}", q.feedback);
            println!("       Time taken:  {}s", q.time_taken);
        }
    }

    if let Some(n) = view.expanded {
        if n > listed.len() {
            tracing::warn!(
                "--expand {n} is past the end of the listing ({} shown)",
                listed.len()
            );
        }
    }

    println!();
}
