// Fri Oct 16 2026 - Alex

use crate::output::{OutputError, ReportEntry, ValidationReport};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Text,
    Markdown,
}

pub struct ReportGenerator {
    format: ReportFormat,
    include_checks: bool,
}

impl ReportGenerator {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            include_checks: true,
        }
    }

    pub fn with_checks(mut self, include: bool) -> Self {
        self.include_checks = include;
        self
    }

    pub fn generate(&self, report: &ValidationReport) -> Result<String, OutputError> {
        match self.format {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportFormat::Text => Ok(self.generate_text(report)),
            ReportFormat::Markdown => Ok(self.generate_markdown(report)),
        }
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, report: &ValidationReport, path: P) -> Result<(), OutputError> {
        let rendered = self.generate(report)?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(rendered.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn generate_text(&self, report: &ValidationReport) -> String {
        let mut out = String::new();
        let rule = "=".repeat(72);

        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "CHART VALIDATION REPORT");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Pass threshold: {} / {}", report.pass_threshold, report.max_score);
        let _ = writeln!(
            out,
            "Images: {}  Valid: {}  Rejected: {}  Avg confidence: {:.1}",
            report.summary.total, report.summary.valid, report.summary.rejected, report.summary.average_confidence
        );
        let _ = writeln!(out, "{}", rule);

        for entry in &report.entries {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "[{}] {} (confidence {}, {}ms)",
                verdict(entry),
                entry.source,
                entry.result.confidence,
                entry.elapsed_ms
            );
            let _ = writeln!(out, "  {}", entry.result.reason);
            if self.include_checks {
                for check in entry.result.checks() {
                    let _ = writeln!(out, "    {}", check);
                }
            }
            if let Some(signal) = &entry.signal {
                let _ = writeln!(
                    out,
                    "  Signal: {} {} | entry {} | SL {} | TP {}",
                    signal.signal,
                    signal.confidence_label(),
                    signal.entry,
                    signal.stop_loss,
                    signal.take_profit
                );
            }
            if let Some(error) = &entry.analysis_error {
                let _ = writeln!(out, "  Analysis error: {}", error);
            }
        }

        out
    }

    fn generate_markdown(&self, report: &ValidationReport) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "# Chart Validation Report");
        let _ = writeln!(out);
        let _ = writeln!(out, "## Summary");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Metric | Value |");
        let _ = writeln!(out, "|--------|-------|");
        let _ = writeln!(out, "| Images | {} |", report.summary.total);
        let _ = writeln!(out, "| Valid | {} |", report.summary.valid);
        let _ = writeln!(out, "| Rejected | {} |", report.summary.rejected);
        let _ = writeln!(out, "| Average confidence | {:.1} |", report.summary.average_confidence);
        let _ = writeln!(out, "| Pass threshold | {} / {} |", report.pass_threshold, report.max_score);
        let _ = writeln!(out);

        let _ = writeln!(out, "## Results");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Image | Verdict | Confidence | Reason |");
        let _ = writeln!(out, "|-------|---------|------------|--------|");
        for entry in &report.entries {
            let _ = writeln!(
                out,
                "| `{}` | {} | {} | {} |",
                entry.source,
                verdict(entry),
                entry.result.confidence,
                entry.result.reason.replace('|', "\\|")
            );
        }

        if self.include_checks {
            for entry in report.entries.iter().filter(|e| !e.result.checks().is_empty()) {
                let _ = writeln!(out);
                let _ = writeln!(out, "### {}", entry.source);
                let _ = writeln!(out);
                for check in entry.result.checks() {
                    let _ = writeln!(out, "- {}", check);
                }
                if let Some(signal) = &entry.signal {
                    let _ = writeln!(out);
                    let _ = writeln!(
                        out,
                        "**{}** at {}: entry {}, stop loss {}, take profit {}",
                        signal.signal,
                        signal.confidence_label(),
                        signal.entry,
                        signal.stop_loss,
                        signal.take_profit
                    );
                }
            }
        }

        out
    }
}

fn verdict(entry: &ReportEntry) -> &'static str {
    if entry.result.is_valid {
        "VALID"
    } else {
        "REJECTED"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationCheck, ValidationResult};

    fn sample_report() -> ValidationReport {
        let mut report = ValidationReport::new(60, 110);
        report.add_entry(ReportEntry::new(
            "btc.png",
            ValidationResult {
                is_valid: true,
                confidence: 80,
                reason: "Chart validated successfully".to_string(),
                checks: Some(vec![
                    ValidationCheck::pass("Chart-like aspect ratio"),
                    ValidationCheck::warn("Grid not detected but candlesticks present"),
                ]),
            },
            12,
        ));
        report.add_entry(ReportEntry::new("cat.jpg", ValidationResult::decode_failed(), 3));
        report
    }

    #[test]
    fn test_summary_counts() {
        let report = sample_report();
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.valid, 1);
        assert_eq!(report.summary.rejected, 1);
        assert_eq!(report.summary.average_confidence, 40.0);
        assert!(!report.all_valid());
    }

    #[test]
    fn test_text_report() {
        let text = ReportGenerator::new(ReportFormat::Text).generate(&sample_report()).unwrap();
        assert!(text.contains("[VALID] btc.png (confidence 80, 12ms)"));
        assert!(text.contains("    ⚠ Grid not detected but candlesticks present"));
        assert!(text.contains("[REJECTED] cat.jpg"));
        assert!(text.contains("Failed to load image"));

        let terse = ReportGenerator::new(ReportFormat::Text).with_checks(false).generate(&sample_report()).unwrap();
        assert!(!terse.contains("✓ Chart-like aspect ratio"));
    }

    #[test]
    fn test_markdown_report() {
        let md = ReportGenerator::new(ReportFormat::Markdown).generate(&sample_report()).unwrap();
        assert!(md.starts_with("# Chart Validation Report"));
        assert!(md.contains("| `btc.png` | VALID | 80 | Chart validated successfully |"));
        assert!(md.contains("### btc.png"));
        assert!(!md.contains("### cat.jpg"));
    }

    #[test]
    fn test_json_report() {
        let json = ReportGenerator::new(ReportFormat::Json).generate(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["valid"], 1);
        assert_eq!(value["entries"][0]["result"]["isValid"], true);
        assert_eq!(value["entries"][0]["result"]["checks"][0], "✓ Chart-like aspect ratio");
        assert!(value["entries"][1]["result"].get("checks").is_none());
        assert!(value["entries"][0].get("signal").is_none());
    }
}
