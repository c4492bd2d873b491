pub mod init;
pub mod list;
pub mod report;
pub mod summarize;
pub mod validate;

use anyhow::Result;

use qscore_core::model::CategoryFilter;

/// Parse `--filter`, falling back to the configured default.
fn resolve_filter(arg: Option<&str>, default: CategoryFilter) -> Result<CategoryFilter> {
    match arg {
        Some(s) => Ok(s.parse::<CategoryFilter>()?),
        None => Ok(default),
    }
}
