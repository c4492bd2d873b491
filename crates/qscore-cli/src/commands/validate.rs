//! The `qscore validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(input: PathBuf) -> Result<()> {
    let sets = qscore_core::parser::load_results(&input)?;
    anyhow::ensure!(
        !sets.is_empty(),
        "no readable result files found in {}",
        input.display()
    );

    let mut total_warnings = 0;

    for set in &sets {
        println!("Result set: {} ({} questions)", set.name, set.questions.len());

        let warnings = qscore_core::parser::validate_results(set);
        for w in &warnings {
            let prefix = w
                .position
                .map(|pos| format!("  [#{pos}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All result sets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
