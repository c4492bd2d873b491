//! The `qscore init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("qscore.toml").exists() {
        println!("qscore.toml already exists, skipping.");
    } else {
        std::fs::write("qscore.toml", SAMPLE_CONFIG)?;
        println!("Created qscore.toml");
    }

    std::fs::create_dir_all("sample-results")?;
    let example_path = std::path::Path::new("sample-results/example.json");
    if example_path.exists() {
        println!("sample-results/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_RESULTS)?;
        println!("Created sample-results/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: qscore validate --input sample-results/example.json");
    println!("  2. Run: qscore summarize --input sample-results/example.json");
    println!("  3. Run: qscore list --input sample-results/example.json --filter needs-improvement");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# qscore configuration

# text, json or markdown
default_format = "text"

# all, excellent, good, fair or needs-improvement
default_filter = "all"

output_dir = "./qscore-reports"
"#;

const EXAMPLE_RESULTS: &str = r#"{
  "name": "Example Interview",
  "questions": [
    {
      "question": "Tell me about yourself.",
      "yourAnswer": "I am a backend engineer with five years of experience in distributed systems.",
      "feedback": "Concise and relevant. Add one concrete achievement.",
      "score": 85,
      "timeTaken": 45
    },
    {
      "question": "Describe a difficult bug you fixed.",
      "yourAnswer": "A race condition in our job queue that dropped tasks under load.",
      "feedback": "Good example; explain how you verified the fix.",
      "score": 68,
      "timeTaken": 90
    },
    {
      "question": "How would you design a rate limiter?",
      "yourAnswer": "Use a counter per user.",
      "feedback": "Too shallow. Discuss token buckets and distributed state.",
      "score": 35,
      "timeTaken": 60
    }
  ]
}
"#;
