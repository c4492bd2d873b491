//! Core data model types for qscore.
//!
//! These are the types every other module works with: the evaluated
//! question record, the score category derived from it, and the filter
//! used to select a view over a result set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseCategoryError;

/// One evaluated interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// The prompt that was asked.
    pub question: String,
    /// The respondent's answer.
    #[serde(default, alias = "your_answer")]
    pub your_answer: String,
    /// Evaluative commentary on the answer.
    #[serde(default)]
    pub feedback: String,
    /// Score, normally in `0..=100`.
    pub score: i64,
    /// Seconds spent answering.
    #[serde(default, alias = "time_taken")]
    pub time_taken: u64,
}

/// Qualitative bucket derived from a numeric score.
///
/// Variants are declared worst-to-best so the derived `Ord` ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreCategory {
    NeedsImprovement,
    Fair,
    Good,
    Excellent,
}

/// Presentation attributes for a score category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Label used on summary counters.
    pub stat_label: &'static str,
    /// Label used on filter selectors.
    pub filter_label: &'static str,
    /// Icon name.
    pub icon: &'static str,
    /// Hex colour.
    pub color: &'static str,
}

// Indexed by discriminant.
static STYLES: [CategoryStyle; 4] = [
    CategoryStyle {
        stat_label: "Needs Work",
        filter_label: "Needs improvement",
        icon: "x-circle",
        color: "#ef4444",
    },
    CategoryStyle {
        stat_label: "Fair",
        filter_label: "Fair",
        icon: "alert-circle",
        color: "#f59e0b",
    },
    CategoryStyle {
        stat_label: "Good",
        filter_label: "Good",
        icon: "award",
        color: "#3b82f6",
    },
    CategoryStyle {
        stat_label: "Excellent",
        filter_label: "Excellent",
        icon: "check-circle",
        color: "#10b981",
    },
];

impl ScoreCategory {
    /// All categories, best first.
    pub const ALL: [ScoreCategory; 4] = [
        ScoreCategory::Excellent,
        ScoreCategory::Good,
        ScoreCategory::Fair,
        ScoreCategory::NeedsImprovement,
    ];

    /// The kebab-case identifier, e.g. `needs-improvement`.
    pub fn slug(self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "excellent",
            ScoreCategory::Good => "good",
            ScoreCategory::Fair => "fair",
            ScoreCategory::NeedsImprovement => "needs-improvement",
        }
    }

    /// Labels, icon and colour for this category.
    pub fn style(self) -> &'static CategoryStyle {
        &STYLES[self as usize]
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ScoreCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excellent" => Ok(ScoreCategory::Excellent),
            "good" => Ok(ScoreCategory::Good),
            "fair" => Ok(ScoreCategory::Fair),
            "needs-improvement" | "needs_improvement" | "poor" => {
                Ok(ScoreCategory::NeedsImprovement)
            }
            _ => Err(ParseCategoryError::UnknownCategory(s.to_string())),
        }
    }
}

/// Selects which records a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ScoreCategory),
}

impl CategoryFilter {
    /// Whether a record with this score belongs in the filtered view.
    pub fn matches(self, score: i64) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => crate::statistics::categorize(score) == category,
        }
    }

    /// Human-readable label for filter selectors.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.style().filter_label,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.slug()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse()
            .map(CategoryFilter::Only)
            .map_err(|_| ParseCategoryError::UnknownFilter(s.to_string()))
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

/// A named set of question records, usually one interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewResults {
    /// Display name, taken from the file or its stem.
    pub name: String,
    /// The evaluated questions, in the order they were asked.
    pub questions: Vec<QuestionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_and_parse() {
        assert_eq!(ScoreCategory::NeedsImprovement.to_string(), "needs-improvement");
        assert_eq!(ScoreCategory::Good.to_string(), "good");
        assert_eq!(
            "Excellent".parse::<ScoreCategory>().unwrap(),
            ScoreCategory::Excellent
        );
        assert_eq!(
            "needs_improvement".parse::<ScoreCategory>().unwrap(),
            ScoreCategory::NeedsImprovement
        );
        assert_eq!(
            "poor".parse::<ScoreCategory>().unwrap(),
            ScoreCategory::NeedsImprovement
        );
        assert!("great".parse::<ScoreCategory>().is_err());
    }

    #[test]
    fn categories_rank_worst_to_best() {
        assert!(ScoreCategory::Excellent > ScoreCategory::Good);
        assert!(ScoreCategory::Good > ScoreCategory::Fair);
        assert!(ScoreCategory::Fair > ScoreCategory::NeedsImprovement);
    }

    #[test]
    fn style_table_matches_category() {
        assert_eq!(ScoreCategory::Excellent.style().icon, "check-circle");
        assert_eq!(ScoreCategory::Excellent.style().color, "#10b981");
        assert_eq!(ScoreCategory::Good.style().icon, "award");
        assert_eq!(ScoreCategory::Fair.style().color, "#f59e0b");
        assert_eq!(ScoreCategory::NeedsImprovement.style().stat_label, "Needs Work");
        assert_eq!(
            ScoreCategory::NeedsImprovement.style().filter_label,
            "Needs improvement"
        );
    }

    #[test]
    fn filter_parse_and_display() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "fair".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ScoreCategory::Fair)
        );
        assert_eq!(
            CategoryFilter::Only(ScoreCategory::NeedsImprovement).to_string(),
            "needs-improvement"
        );
        let err = "some".parse::<CategoryFilter>().unwrap_err();
        assert_eq!(err, ParseCategoryError::UnknownFilter("some".into()));
    }

    #[test]
    fn filter_labels() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(
            CategoryFilter::Only(ScoreCategory::NeedsImprovement).label(),
            "Needs improvement"
        );
    }

    #[test]
    fn record_accepts_camel_and_snake_case() {
        let camel: QuestionRecord = serde_json::from_str(
            r#"{"question":"Q","yourAnswer":"A","feedback":"F","score":72,"timeTaken":41}"#,
        )
        .unwrap();
        let snake: QuestionRecord = serde_json::from_str(
            r#"{"question":"Q","your_answer":"A","feedback":"F","score":72,"time_taken":41}"#,
        )
        .unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.time_taken, 41);

        let json = serde_json::to_string(&camel).unwrap();
        assert!(json.contains("\"yourAnswer\""));
        assert!(json.contains("\"timeTaken\""));
    }

    #[test]
    fn filter_serializes_as_string() {
        let json = serde_json::to_string(&CategoryFilter::Only(ScoreCategory::Good)).unwrap();
        assert_eq!(json, "\"good\"");
        let back: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(back, CategoryFilter::All);
        assert!(serde_json::from_str::<CategoryFilter>("\"best\"").is_err());
    }
}
