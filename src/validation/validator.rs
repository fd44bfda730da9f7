// Thu Oct 15 2026 - Alex

use crate::analysis::candle::detect_candles;
use crate::analysis::color::analyze_dark_theme;
use crate::analysis::edge::estimate_edges;
use crate::analysis::grid::detect_grid;
use crate::analysis::{AnalysisError, EdgeTier};
use crate::config::{Config, ConfigError};
use crate::pixels::{DataUriDecoder, ImageDecoder, PixelBuffer};
use crate::validation::gates;
use crate::validation::report::ValidationCheck;
use crate::validation::result::{ValidationResult, REASON_NOT_A_CHART, REASON_VALID};
use crate::validation::rules::{default_rules, BonusAnalyzer};
use log::{debug, info, warn};
use std::sync::Arc;

/// Decodes an image and scores how much it looks like a trading chart.
pub struct ChartValidator {
    config: Config,
    decoder: Arc<dyn ImageDecoder>,
    bonus: Vec<Box<dyn BonusAnalyzer>>,
}

impl ChartValidator {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let bonus = default_rules(&config);
        Ok(Self {
            config,
            decoder: Arc::new(DataUriDecoder::new()),
            bonus,
        })
    }

    pub fn with_decoder(mut self, decoder: Arc<dyn ImageDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn with_bonus(mut self, analyzer: Box<dyn BonusAnalyzer>) -> Self {
        self.bonus.push(analyzer);
        self
    }

    pub fn without_bonus_analyzers(mut self) -> Self {
        self.bonus.clear();
        self
    }

    pub fn bonus_names(&self) -> Vec<&str> {
        self.bonus.iter().map(|b| b.name()).collect()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn max_score(&self) -> u32 {
        self.bonus
            .iter()
            .map(|b| b.max_weight())
            .fold(self.config.core_max_score(), u32::saturating_add)
    }

    /// Never fails: decode and analysis faults become invalid results.
    pub async fn validate(&self, encoded: &str) -> ValidationResult {
        match self.decoder.decode(encoded).await {
            Ok(buffer) => self.evaluate(&buffer),
            Err(e) => {
                warn!("Image decode failed: {}", e);
                ValidationResult::decode_failed()
            }
        }
    }

    pub fn evaluate(&self, buffer: &PixelBuffer) -> ValidationResult {
        match self.validate_buffer(buffer) {
            Ok(result) => result,
            Err(e) => {
                warn!("Image analysis failed: {}", e);
                ValidationResult::analysis_failed()
            }
        }
    }

    pub fn validate_buffer(&self, buffer: &PixelBuffer) -> Result<ValidationResult, AnalysisError> {
        let config = &self.config;
        let mut card = Scorecard::new();

        debug!(
            "Validating {}x{} (aspect {:.3})",
            buffer.width(),
            buffer.height(),
            buffer.aspect_ratio()
        );

        if !gates::aspect_ratio_ok(buffer, &config.gates) {
            card.note(ValidationCheck::fail(gates::aspect_ratio_label(&config.gates)));
            return Ok(card.reject(gates::REASON_ASPECT_RATIO));
        }
        card.award(config.gates.aspect_weight, ValidationCheck::pass("Chart-like aspect ratio"));

        if !gates::resolution_ok(buffer, &config.gates) {
            card.note(ValidationCheck::fail("Resolution too low"));
            return Ok(card.reject(&gates::resolution_reason(&config.gates)));
        }
        card.award(config.gates.resolution_weight, ValidationCheck::pass("Sufficient resolution"));

        let candles = detect_candles(buffer, &config.candles)?;
        let has_candles = candles.has_candlesticks(&config.candles);
        if has_candles {
            card.award(
                config.candles.weight,
                ValidationCheck::pass(format!(
                    "Candlestick patterns detected ({} green, {} red)",
                    candles.green_count, candles.red_count
                )),
            );
        } else {
            card.note(ValidationCheck::warn("No candlestick patterns found"));
        }

        let colors = analyze_dark_theme(buffer, &config.dark_theme)?;
        debug!("Dark ratio {:.4}", colors.dark_ratio());
        if colors.is_dark_theme(&config.dark_theme) {
            card.award(config.dark_theme.weight, ValidationCheck::pass("Dark theme detected"));
        }

        let grid = detect_grid(buffer, &config.grid)?;
        if grid.has_grid() {
            card.award(config.grid.weight, ValidationCheck::pass("Grid lines detected"));
        } else if has_candles {
            card.award(
                config.grid.partial_weight,
                ValidationCheck::warn("Grid not detected but candlesticks present"),
            );
        } else {
            card.note(ValidationCheck::warn("No grid structure found"));
        }

        let edges = estimate_edges(buffer, &config.edges)?;
        match edges.tier(&config.edges) {
            EdgeTier::High => card.award(
                config.edges.high_weight,
                ValidationCheck::pass("High line density (indicators/trend lines detected)"),
            ),
            EdgeTier::Moderate => card.award(config.edges.moderate_weight, ValidationCheck::pass("Moderate line density")),
            EdgeTier::Low => card.note(ValidationCheck::warn("Low line density")),
        }

        for analyzer in &self.bonus {
            if let Some(award) = analyzer.evaluate(buffer)? {
                card.award(award.weight, award.check);
            }
        }

        Ok(card.decide(config.pass_threshold))
    }
}

impl Default for ChartValidator {
    fn default() -> Self {
        let config = Config::default();
        let bonus = default_rules(&config);
        Self {
            config,
            decoder: Arc::new(DataUriDecoder::new()),
            bonus,
        }
    }
}

struct Scorecard {
    score: u32,
    checks: Vec<ValidationCheck>,
}

impl Scorecard {
    fn new() -> Self {
        Self {
            score: 0,
            checks: Vec::new(),
        }
    }

    fn award(&mut self, weight: u32, check: ValidationCheck) {
        self.score = self.score.saturating_add(weight);
        self.checks.push(check);
    }

    fn note(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    fn reject(self, reason: &str) -> ValidationResult {
        info!("Rejected at gate with confidence {}: {}", self.score, reason);
        ValidationResult {
            is_valid: false,
            confidence: self.score,
            reason: reason.to_string(),
            checks: Some(self.checks),
        }
    }

    fn decide(self, threshold: u32) -> ValidationResult {
        let is_valid = self.score >= threshold;
        info!(
            "Chart score {} (threshold {}): {}",
            self.score,
            threshold,
            if is_valid { "valid" } else { "invalid" }
        );
        ValidationResult {
            is_valid,
            confidence: self.score,
            reason: if is_valid { REASON_VALID } else { REASON_NOT_A_CHART }.to_string(),
            checks: Some(self.checks),
        }
    }
}
