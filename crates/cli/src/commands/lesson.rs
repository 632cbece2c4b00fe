//! Lesson commands

use anyhow::{Context, Result};
use primer_core::{Lesson, LessonConfig, Transcript};

use crate::OutputFormat;

/// Print every lesson with its one-line summary
pub fn list() {
    println!("📚 Available lessons:\n");
    for lesson in Lesson::all() {
        println!("  {:<14} {}", lesson.as_str(), lesson.summary());
    }
    println!("\n  {:<14} run every lesson in order", "all");
}

/// Run `name` (or every lesson for `all`) and print the transcripts
pub fn run(name: &str, config: &LessonConfig, format: OutputFormat) -> Result<()> {
    let lessons = select(name)?;

    let transcripts = lessons
        .into_iter()
        .map(|lesson| {
            primer_core::run(lesson, config)
                .with_context(|| format!("Lesson '{}' failed", lesson))
        })
        .collect::<Result<Vec<Transcript>>>()?;

    match format {
        OutputFormat::Text => {
            for transcript in &transcripts {
                println!("{}", transcript);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&transcripts)
                .context("Failed to serialize transcripts")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn select(name: &str) -> Result<Vec<Lesson>> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(Lesson::all());
    }
    Ok(vec![Lesson::parse(name)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert_eq!(select("all").unwrap().len(), 5);
        assert_eq!(select("ALL").unwrap().len(), 5);
        assert_eq!(select("Singleton").unwrap(), vec![Lesson::Singleton]);
        assert!(select("observer").is_err());
    }

    #[test]
    fn test_run_all_formats() {
        let config = LessonConfig::default();
        assert!(run("all", &config, OutputFormat::Text).is_ok());
        assert!(run("inheritance", &config, OutputFormat::Json).is_ok());
    }
}
