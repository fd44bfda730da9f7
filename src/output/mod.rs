// Fri Oct 16 2026 - Alex

pub mod report;

pub use report::{ReportFormat, ReportGenerator};

use crate::pipeline::PipelineOutcome;
use crate::signal::TradeSignal;
use crate::validation::ValidationResult;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub source: String,
    pub result: ValidationResult,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<TradeSignal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_error: Option<String>,
}

impl ReportEntry {
    pub fn new(source: &str, result: ValidationResult, elapsed_ms: u64) -> Self {
        Self {
            source: source.to_string(),
            result,
            elapsed_ms,
            signal: None,
            analysis_error: None,
        }
    }

    pub fn from_outcome(source: &str, outcome: PipelineOutcome, elapsed_ms: u64) -> Self {
        match outcome {
            PipelineOutcome::Rejected(result) => Self::new(source, result, elapsed_ms),
            PipelineOutcome::Analyzed { validation, signal } => Self {
                signal: Some(signal),
                ..Self::new(source, validation, elapsed_ms)
            },
            PipelineOutcome::AnalysisFailed { validation, error } => Self {
                analysis_error: Some(error),
                ..Self::new(source, validation, elapsed_ms)
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    pub valid: usize,
    pub rejected: usize,
    pub average_confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub version: String,
    pub generated_at: u64,
    pub pass_threshold: u32,
    pub max_score: u32,
    pub entries: Vec<ReportEntry>,
    pub summary: ReportSummary,
}

impl ValidationReport {
    pub fn new(pass_threshold: u32, max_score: u32) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: unix_now(),
            pass_threshold,
            max_score,
            entries: Vec::new(),
            summary: ReportSummary::default(),
        }
    }

    pub fn add_entry(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
        self.compute_summary();
    }

    pub fn compute_summary(&mut self) {
        let total = self.entries.len();
        let valid = self.entries.iter().filter(|e| e.result.is_valid).count();
        let confidence: u64 = self.entries.iter().map(|e| e.result.confidence as u64).sum();

        self.summary = ReportSummary {
            total,
            valid,
            rejected: total - valid,
            average_confidence: if total == 0 { 0.0 } else { confidence as f64 / total as f64 },
        };
    }

    pub fn all_valid(&self) -> bool {
        self.summary.rejected == 0
    }
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
