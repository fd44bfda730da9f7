// Fri Oct 16 2026 - Alex

use crate::output::ReportSummary;
use crate::signal::TradeSignal;
use crate::utils::pluralize;
use crate::validation::{CheckStatus, ValidationCheck, ValidationResult};
use colored::*;

/// Terminal rendering for validation results.
pub struct ResultRenderer {
    use_color: bool,
    show_checks: bool,
}

impl ResultRenderer {
    pub fn new() -> Self {
        Self {
            use_color: true,
            show_checks: true,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_checks(mut self, show_checks: bool) -> Self {
        self.show_checks = show_checks;
        self
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn render_check(&self, check: &ValidationCheck) -> String {
        let color = match check.status {
            CheckStatus::Pass => Color::Green,
            CheckStatus::Warn => Color::Yellow,
            CheckStatus::Fail => Color::Red,
        };
        format!("    {}", self.paint(&check.to_string(), color))
    }

    pub fn render_result(&self, source: &str, result: &ValidationResult, max_score: u32) -> String {
        let (tag, color) = if result.is_valid {
            ("[+]", Color::Green)
        } else {
            ("[!]", Color::Red)
        };

        let mut lines = vec![format!(
            "{} {} {}/{} {}",
            self.paint(tag, color),
            if self.use_color { source.bold().to_string() } else { source.to_string() },
            result.confidence,
            max_score,
            self.paint(&result.reason, color)
        )];

        if self.show_checks {
            lines.extend(result.checks().iter().map(|c| self.render_check(c)));
        }

        lines.join("\n")
    }

    pub fn render_signal(&self, signal: &TradeSignal) -> String {
        let mut lines = vec![format!(
            "    {} {} ({}) entry {} | SL {} | TP {}",
            self.paint("Signal:", Color::Cyan),
            signal.signal,
            signal.confidence_label(),
            signal.entry,
            signal.stop_loss,
            signal.take_profit
        )];
        for note in &signal.strategies {
            lines.push(format!("      {}: {} - {}", note.name, note.status, note.detail));
        }
        lines.join("\n")
    }

    pub fn render_summary(&self, summary: &ReportSummary) -> String {
        let valid = self.paint(&summary.valid.to_string(), Color::Green);
        let rejected = if summary.rejected > 0 {
            self.paint(&summary.rejected.to_string(), Color::Red)
        } else {
            summary.rejected.to_string()
        };
        format!(
            "{} validated: {} valid, {} rejected, average confidence {:.1}",
            pluralize(summary.total, "image", "images"),
            valid,
            rejected,
            summary.average_confidence
        )
    }
}

impl Default for ResultRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ResultRenderer {
        ResultRenderer::new().with_color(false)
    }

    #[test]
    fn test_render_result_plain() {
        let result = ValidationResult {
            is_valid: false,
            confidence: 15,
            reason: "too small".to_string(),
            checks: Some(vec![
                ValidationCheck::pass("Chart-like aspect ratio"),
                ValidationCheck::fail("Resolution too low"),
            ]),
        };
        let rendered = plain().render_result("tiny.png", &result, 110);
        assert_eq!(
            rendered,
            "[!] tiny.png 15/110 too small\n    ✓ Chart-like aspect ratio\n    ✗ Resolution too low"
        );

        let compact = plain().with_checks(false).render_result("tiny.png", &result, 110);
        assert_eq!(compact.lines().count(), 1);
    }

    #[test]
    fn test_render_summary() {
        let summary = ReportSummary {
            total: 3,
            valid: 2,
            rejected: 1,
            average_confidence: 61.0,
        };
        assert_eq!(
            plain().render_summary(&summary),
            "3 images validated: 2 valid, 1 rejected, average confidence 61.0"
        );
    }
}
