// Wed Oct 14 2026 - Alex

use crate::validation::report::ValidationCheck;
use serde::Serialize;

pub const REASON_VALID: &str = "Chart validated successfully";
pub const REASON_NOT_A_CHART: &str = "This doesn't appear to be a valid trading chart. Please upload a screenshot from TradingView, Binance, Coinbase, or MetaTrader.";
pub const REASON_DECODE_FAILED: &str = "Failed to load image";
pub const REASON_ANALYSIS_FAILED: &str = "Failed to analyze image structure";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub confidence: u32,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<ValidationCheck>>,
}

impl ValidationResult {
    pub fn decode_failed() -> Self {
        Self {
            is_valid: false,
            confidence: 0,
            reason: REASON_DECODE_FAILED.to_string(),
            checks: None,
        }
    }

    pub fn analysis_failed() -> Self {
        Self {
            is_valid: false,
            confidence: 0,
            reason: REASON_ANALYSIS_FAILED.to_string(),
            checks: None,
        }
    }

    pub fn checks(&self) -> &[ValidationCheck] {
        self.checks.as_deref().unwrap_or(&[])
    }

    pub fn has_check(&self, needle: &str) -> bool {
        self.checks().iter().any(|c| c.message.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_results_have_no_checks() {
        let result = ValidationResult::decode_failed();
        assert!(!result.is_valid);
        assert_eq!(result.confidence, 0);
        assert!(result.checks().is_empty());
        assert_eq!(ValidationResult::analysis_failed().reason, REASON_ANALYSIS_FAILED);
    }

    #[test]
    fn test_camel_case_json() {
        let result = ValidationResult {
            is_valid: true,
            confidence: 75,
            reason: REASON_VALID.to_string(),
            checks: Some(vec![ValidationCheck::pass("Sufficient resolution")]),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isValid"], true);
        assert_eq!(json["confidence"], 75);
        assert_eq!(json["checks"][0], "✓ Sufficient resolution");

        let json = serde_json::to_value(ValidationResult::decode_failed()).unwrap();
        assert!(json.get("checks").is_none());
    }
}
