//! Score categorization and aggregate statistics.
//!
//! Everything here is a pure function of its input. The category thresholds
//! live only in [`categorize`]; every other score-band decision goes
//! through it.

use serde::{Deserialize, Serialize};

use crate::model::{CategoryFilter, QuestionRecord, ScoreCategory};

/// Lowest score that counts as [`ScoreCategory::Excellent`].
pub const EXCELLENT_MIN: i64 = 80;
/// Lowest score that counts as [`ScoreCategory::Good`].
pub const GOOD_MIN: i64 = 60;
/// Lowest score that counts as [`ScoreCategory::Fair`].
pub const FAIR_MIN: i64 = 40;

/// Map a score to its category.
///
/// Defined for every integer: anything below 0 is `NeedsImprovement`,
/// anything above 100 is `Excellent`.
pub fn categorize(score: i64) -> ScoreCategory {
    if score >= EXCELLENT_MIN {
        ScoreCategory::Excellent
    } else if score >= GOOD_MIN {
        ScoreCategory::Good
    } else if score >= FAIR_MIN {
        ScoreCategory::Fair
    } else {
        ScoreCategory::NeedsImprovement
    }
}

/// Counts and timing summary for a set of question records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    /// Number of records.
    pub total: usize,
    /// Records scoring 80 or more.
    pub excellent: usize,
    /// Records scoring 60..80.
    pub good: usize,
    /// Records scoring 40..60.
    pub fair: usize,
    /// Records scoring below 40.
    pub poor: usize,
    /// Mean seconds per answer, rounded half up. Zero for an empty set.
    pub avg_time: u64,
}

impl AggregateStats {
    /// Number of records in `category`.
    pub fn count(&self, category: ScoreCategory) -> usize {
        match category {
            ScoreCategory::Excellent => self.excellent,
            ScoreCategory::Good => self.good,
            ScoreCategory::Fair => self.fair,
            ScoreCategory::NeedsImprovement => self.poor,
        }
    }

    /// `(category, count)` pairs, best category first.
    pub fn counts(&self) -> impl Iterator<Item = (ScoreCategory, usize)> + '_ {
        ScoreCategory::ALL.into_iter().map(move |c| (c, self.count(c)))
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    fn bump(&mut self, category: ScoreCategory) {
        let slot = match category {
            ScoreCategory::Excellent => &mut self.excellent,
            ScoreCategory::Good => &mut self.good,
            ScoreCategory::Fair => &mut self.fair,
            ScoreCategory::NeedsImprovement => &mut self.poor,
        };
        *slot += 1;
    }
}

/// Summarize a set of records in a single pass.
pub fn summarize(records: &[QuestionRecord]) -> AggregateStats {
    let mut stats = AggregateStats::default();
    let mut total_time: u128 = 0;

    for record in records {
        stats.bump(categorize(record.score));
        total_time += u128::from(record.time_taken);
    }
    stats.total = records.len();

    stats.avg_time = if stats.total == 0 {
        0
    } else {
        rounded_mean(total_time, stats.total as u128)
    };

    stats
}

// Integer mean with halves rounded up; n must be non-zero.
fn rounded_mean(sum: u128, n: u128) -> u64 {
    let mean = (sum + n / 2) / n;
    u64::try_from(mean).unwrap_or(u64::MAX)
}

/// Records whose category matches `filter`, in their original order.
pub fn filter_by_category(
    records: &[QuestionRecord],
    filter: CategoryFilter,
) -> Vec<&QuestionRecord> {
    match filter {
        CategoryFilter::All => records.iter().collect(),
        CategoryFilter::Only(_) => records.iter().filter(|r| filter.matches(r.score)).collect(),
    }
}
