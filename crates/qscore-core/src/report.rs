//! Analysis report types with JSON persistence and markdown output.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{CategoryFilter, InterviewResults, QuestionRecord, ScoreCategory};
use crate::statistics::{categorize, summarize, AggregateStats};

/// A question as it appears in a report listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedQuestion {
    /// 1-based position in the full result set.
    pub position: usize,
    /// Category derived from the score.
    pub category: ScoreCategory,
    /// The original record.
    pub record: QuestionRecord,
}

/// A complete analysis of one result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Name of the analyzed result set.
    pub name: String,
    /// Filter applied to `questions`.
    pub filter: CategoryFilter,
    /// Statistics over the whole set, independent of `filter`.
    pub stats: AggregateStats,
    /// Questions that pass `filter`, in original order.
    pub questions: Vec<AnalyzedQuestion>,
}

impl AnalysisReport {
    /// Analyze a result set, listing only the questions that pass `filter`.
    pub fn build(results: &InterviewResults, filter: CategoryFilter) -> Self {
        let questions = results
            .questions
            .iter()
            .enumerate()
            .filter(|(_, q)| filter.matches(q.score))
            .map(|(i, q)| AnalyzedQuestion {
                position: i + 1,
                category: categorize(q.score),
                record: q.clone(),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: results.name.clone(),
            filter,
            stats: summarize(&results.questions),
            questions,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AnalysisReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.name));

        if self.stats.is_empty() {
            md.push_str("No interview data found.\n");
            return md;
        }

        md.push_str("| Total |");
        for category in ScoreCategory::ALL {
            md.push_str(&format!(" {} |", category.style().stat_label));
        }
        md.push_str(" Avg Time |\n");
        md.push_str("|-------|");
        for _ in ScoreCategory::ALL {
            md.push_str("------|");
        }
        md.push_str("----------|\n");

        md.push_str(&format!("| {} |", self.stats.total));
        for (_, count) in self.stats.counts() {
            md.push_str(&format!(" {count} |"));
        }
        md.push_str(&format!(" {}s |\n\n", self.stats.avg_time));

        md.push_str(&format!("**Filter:** {}\n\n", self.filter.label()));

        if self.questions.is_empty() {
            md.push_str(&format!("No questions match filter '{}'.\n", self.filter));
            return md;
        }

        for q in &self.questions {
            md.push_str(&format!(
                "### {}. {} ({}%, {})\n\n",
                q.position,
                q.record.question,
                q.record.score,
                q.category.style().filter_label
            ));
            md.push_str(&format!("**Your answer:** {}\n\n", q.record.your_answer));
            md.push_str(&format!("**Feedback:** {}\n\n", q.record.feedback));
            md.push_str(&format!("**Time taken:** {}s\n\n", q.record.time_taken));
        }

        md
    }
}
