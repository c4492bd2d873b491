//! Result file loader.
//!
//! Loads interview result sets from JSON and TOML files and directories,
//! and validates them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{InterviewResults, QuestionRecord};

/// On-disk formats a result set can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsFormat {
    Json,
    Toml,
}

impl ResultsFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(ResultsFormat::Json),
            "toml" => Some(ResultsFormat::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WrappedResults {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

/// Parse a single result file.
pub fn parse_results(path: &Path) -> Result<InterviewResults> {
    let format = ResultsFormat::from_path(path).with_context(|| {
        format!(
            "unsupported result file (expected .json or .toml): {}",
            path.display()
        )
    })?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read result file: {}", path.display()))?;

    let results = parse_results_str(&content, format, path)?;
    tracing::debug!(
        "loaded {} question(s) from {}",
        results.questions.len(),
        path.display()
    );
    Ok(results)
}

/// Parse result file contents (useful for testing).
///
/// `source_path` supplies the default name and error context.
pub fn parse_results_str(
    content: &str,
    format: ResultsFormat,
    source_path: &Path,
) -> Result<InterviewResults> {
    let wrapped = match format {
        ResultsFormat::Json => parse_json(content)
            .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?,
        ResultsFormat::Toml => toml::from_str(content)
            .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?,
    };

    let name = wrapped
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| default_name(source_path));

    Ok(InterviewResults {
        name,
        questions: wrapped.questions,
    })
}

// A bare array of records or a wrapping object. The top-level shape picks
// the target type so field errors are reported as-is.
fn parse_json(content: &str) -> Result<WrappedResults> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let wrapped = if value.is_array() {
        WrappedResults {
            name: None,
            questions: serde_json::from_value(value)?,
        }
    } else {
        serde_json::from_value(value)?
    };
    Ok(wrapped)
}

fn default_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "results".to_string())
}

/// Recursively load every `.json` and `.toml` result file under `dir`.
///
/// Files are visited in path order. Files that fail to parse are skipped.
pub fn load_results_directory(dir: &Path) -> Result<Vec<InterviewResults>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    entries.sort();

    let mut sets = Vec::new();
    for path in entries {
        if path.is_dir() {
            sets.extend(load_results_directory(&path)?);
        } else if ResultsFormat::from_path(&path).is_some() {
            match parse_results(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// Load a single file or a whole directory of result sets.
pub fn load_results(path: &Path) -> Result<Vec<InterviewResults>> {
    if path.is_dir() {
        load_results_directory(path)
    } else {
        Ok(vec![parse_results(path)?])
    }
}

/// A warning from result set validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// 1-based position of the question (if applicable).
    pub position: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a result set for data that will summarize oddly.
pub fn validate_results(set: &InterviewResults) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.questions.is_empty() {
        warnings.push(ValidationWarning {
            position: None,
            message: "no interview data found".into(),
        });
        return warnings;
    }

    let mut seen = HashSet::new();
    for (i, q) in set.questions.iter().enumerate() {
        let position = Some(i + 1);

        if !(0..=100).contains(&q.score) {
            warnings.push(ValidationWarning {
                position,
                message: format!("score {} is outside 0..=100", q.score),
            });
        }

        let text = q.question.trim();
        if text.is_empty() {
            warnings.push(ValidationWarning {
                position,
                message: "question text is empty".into(),
            });
        } else if !seen.insert(text) {
            warnings.push(ValidationWarning {
                position,
                message: format!("duplicate question: {text}"),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JSON: &str = r#"{
  "name": "Backend Interview",
  "questions": [
    {
      "question": "Explain ownership.",
      "yourAnswer": "Each value has a single owner.",
      "feedback": "Clear and correct.",
      "score": 90,
      "timeTaken": 30
    },
    {
      "question": "What is a trait object?",
      "yourAnswer": "A dyn pointer.",
      "feedback": "Mention vtables.",
      "score": 55,
      "timeTaken": 60
    }
  ]
}"#;

    const VALID_TOML: &str = r#"
name = "Frontend Interview"

[[questions]]
question = "What is the virtual DOM?"
yourAnswer = "An in-memory tree."
feedback = "Good start."
score = 65
timeTaken = 42

[[questions]]
question = "Explain closures."
your_answer = "Functions capturing scope."
score = 35
time_taken = 20
"#;

    #[test]
    fn parse_wrapped_json() {
        let set =
            parse_results_str(VALID_JSON, ResultsFormat::Json, Path::new("x.json")).unwrap();
        assert_eq!(set.name, "Backend Interview");
        assert_eq!(set.questions.len(), 2);
        assert_eq!(set.questions[1].score, 55);
        assert_eq!(set.questions[1].time_taken, 60);
    }

    #[test]
    fn parse_bare_json_array_uses_file_stem() {
        let json = r#"[{"question":"Q1","yourAnswer":"A","feedback":"F","score":10,"timeTaken":5}]"#;
        let set =
            parse_results_str(json, ResultsFormat::Json, Path::new("dir/mock-1.json")).unwrap();
        assert_eq!(set.name, "mock-1");
        assert_eq!(set.questions.len(), 1);
    }

    #[test]
    fn parse_toml_with_mixed_key_styles() {
        let set =
            parse_results_str(VALID_TOML, ResultsFormat::Toml, Path::new("x.toml")).unwrap();
        assert_eq!(set.name, "Frontend Interview");
        assert_eq!(set.questions[0].your_answer, "An in-memory tree.");
        assert_eq!(set.questions[1].your_answer, "Functions capturing scope.");
        assert_eq!(set.questions[1].feedback, "");
        assert_eq!(set.questions[1].time_taken, 20);
    }

    #[test]
    fn parse_malformed_json() {
        let result = parse_results_str("{ not json", ResultsFormat::Json, Path::new("bad.json"));
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_negative_time() {
        let json = r#"[{"question":"Q","score":10,"timeTaken":-3}]"#;
        let err = parse_results_str(json, ResultsFormat::Json, Path::new("t.json")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("-3"), "error should name the bad value: {msg}");
        assert!(!msg.contains("did not match any variant"));
    }

    #[test]
    fn parse_wrapped_reports_missing_field() {
        let json = r#"{"name":"x","questions":[{"question":"Q","timeTaken":3}]}"#;
        let err = parse_results_str(json, ResultsFormat::Json, Path::new("t.json")).unwrap_err();
        assert!(format!("{err:#}").contains("missing field `score`"));
    }

    #[test]
    fn unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.yaml");
        std::fs::write(&path, "questions: []").unwrap();
        let err = parse_results(&path).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported result file"));
    }

    #[test]
    fn load_directory_sorted_and_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("a.json"), VALID_JSON).unwrap();
        std::fs::write(dir.path().join("c.json"), "oops").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sets = load_results_directory(dir.path()).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].name, "Backend Interview");
        assert_eq!(sets[1].name, "Frontend Interview");
    }

    #[test]
    fn load_directory_rejects_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        std::fs::write(&path, VALID_JSON).unwrap();
        assert!(load_results_directory(&path).is_err());
        assert_eq!(load_results(&path).unwrap().len(), 1);
    }

    #[test]
    fn validate_clean_set() {
        let set =
            parse_results_str(VALID_JSON, ResultsFormat::Json, Path::new("x.json")).unwrap();
        assert!(validate_results(&set).is_empty());
    }

    #[test]
    fn validate_flags_problems() {
        let json = r#"[
            {"question":"Same","score":105,"timeTaken":1},
            {"question":"  ","score":50,"timeTaken":1},
            {"question":"Same","score":-1,"timeTaken":1}
        ]"#;
        let set = parse_results_str(json, ResultsFormat::Json, Path::new("x.json")).unwrap();
        let warnings = validate_results(&set);
        assert!(warnings
            .iter()
            .any(|w| w.position == Some(1) && w.message.contains("outside")));
        assert!(warnings
            .iter()
            .any(|w| w.position == Some(2) && w.message.contains("empty")));
        assert!(warnings
            .iter()
            .any(|w| w.position == Some(3) && w.message.contains("duplicate")));
        assert!(warnings
            .iter()
            .any(|w| w.position == Some(3) && w.message.contains("-1")));
    }

    #[test]
    fn validate_empty_set() {
        let set = InterviewResults {
            name: "empty".into(),
            questions: vec![],
        };
        let warnings = validate_results(&set);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no interview data"));
    }
}
