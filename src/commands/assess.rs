use crate::assessment::AssessmentEngine;
use crate::config;
use crate::core::SubTest;
use crate::io::output::{create_writer, AssessmentReport, OutputFormat};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub struct AssessConfig {
    pub scores_path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Run one assessment: read the scores file, combine with the configured
/// weights, and render the report.
pub fn run_assess(config: AssessConfig) -> Result<()> {
    let scores = read_scores(&config.scores_path)?;

    let weights = config::load_config().weights;
    let engine = AssessmentEngine::new(weights)?;
    let assessment = engine.assess_detailed(&scores)?;
    log::info!(
        "Assessment complete: cumulative_score={:.4} class={}",
        assessment.result.cumulative_score,
        assessment.result.final_class
    );

    let report = AssessmentReport::new(scores, *engine.weights(), assessment);
    write_report(&report, config.format, config.output.as_deref())
}

fn read_scores(path: &std::path::Path) -> Result<BTreeMap<SubTest, f64>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read scores file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse scores file {}", path.display()))
}

fn write_report(
    report: &AssessmentReport,
    format: OutputFormat,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let mut writer = match output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            create_writer(file, format)
        }
        None => create_writer(std::io::stdout(), format),
    };
    writer.write_report(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_a_five_key_scores_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            indoc! {r#"
                {
                    "eye_tracking": 0.8,
                    "handwriting": 0.9,
                    "phonetics": 0.4,
                    "questionnaire": 0.4,
                    "dictation": 0.3
                }
            "#}
            .as_bytes(),
        )
        .unwrap();

        let scores = read_scores(file.path()).unwrap();
        assert_eq!(scores.len(), 5);
        assert_eq!(scores[&SubTest::EyeTracking], 0.8);
    }

    #[test]
    fn unknown_sub_test_key_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"eye_tracking": 0.8, "telepathy": 0.4}"#)
            .unwrap();
        assert!(read_scores(file.path()).is_err());
    }

    #[test]
    fn missing_scores_file_is_an_error() {
        assert!(read_scores(std::path::Path::new("/nonexistent/scores.json")).is_err());
    }
}
