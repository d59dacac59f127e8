//! Report rendering for assessment results.

use crate::assessment::DetailedAssessment;
use crate::config::SubTestWeights;
use crate::core::{ClassificationBand, SubTest};
use chrono::{DateTime, Utc};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Everything one assessment run produced, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub timestamp: DateTime<Utc>,
    pub scores: BTreeMap<SubTest, f64>,
    pub weights: SubTestWeights,
    #[serde(flatten)]
    pub assessment: DetailedAssessment,
}

impl AssessmentReport {
    pub fn new(
        scores: BTreeMap<SubTest, f64>,
        weights: SubTestWeights,
        assessment: DetailedAssessment,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            scores,
            weights,
            assessment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()>;
}

/// Build the writer for a format over any `Write` sink.
pub fn create_writer<W: Write + 'static>(
    writer: W,
    format: OutputFormat,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Screening Assessment Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let result = &report.assessment.result;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Cumulative score: {:.4}",
            result.cumulative_score
        )?;
        writeln!(self.writer, "- Classification: {}", result.final_class)?;
        writeln!(
            self.writer,
            "- Dominant class: {}",
            result.dominant_class
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Sub-test Breakdown")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Sub-test | Score | Membership | Weight | Adjusted | Consistent |"
        )?;
        writeln!(
            self.writer,
            "|----------|-------|------------|--------|----------|------------|"
        )?;
        for row in &report.assessment.breakdown {
            writeln!(
                self.writer,
                "| {} | {:.4} | {:.1} | {:.2} | {:.3} | {} |",
                row.sub_test,
                row.normalized_score,
                row.membership.value(),
                row.base_weight,
                row.adjusted_weight,
                if row.consistent { "yes" } else { "no" },
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_breakdown(report)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn classification_colored(band: ClassificationBand) -> ColoredString {
        match band {
            ClassificationBand::Strong => band.label().red().bold(),
            ClassificationBand::Moderate => band.label().yellow().bold(),
            ClassificationBand::None => band.label().green().bold(),
        }
    }

    fn breakdown_table(report: &AssessmentReport) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Sub-test",
                "Score",
                "Membership",
                "Weight",
                "Adjusted",
                "Consistent",
            ]);
        for row in &report.assessment.breakdown {
            table.add_row(vec![
                Cell::new(row.sub_test),
                Cell::new(format!("{:.4}", row.normalized_score)),
                Cell::new(format!("{:.1}", row.membership.value())),
                Cell::new(format!("{:.2}", row.base_weight)),
                Cell::new(format!("{:.3}", row.adjusted_weight)),
                Cell::new(if row.consistent { "yes" } else { "no" }),
            ]);
        }
        table
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let result = &report.assessment.result;
        writeln!(self.writer, "{}", "Screening Assessment".bold())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", Self::breakdown_table(report))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Cumulative score: {}",
            format!("{:.4}", result.cumulative_score).bold()
        )?;
        writeln!(
            self.writer,
            "Classification:   {}",
            Self::classification_colored(result.final_class)
        )?;
        writeln!(self.writer, "Dominant class:   {}", result.dominant_class)?;
        Ok(())
    }
}
