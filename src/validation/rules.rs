// Wed Oct 14 2026 - Alex

use crate::analysis::platform::detect_platform;
use crate::analysis::ticker::detect_ticker_text;
use crate::analysis::AnalysisError;
use crate::config::{Config, PlatformConfig, TickerConfig};
use crate::pixels::PixelBuffer;
use crate::validation::report::ValidationCheck;
use log::debug;

/// Points and trail entry granted by a bonus analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusAward {
    pub weight: u32,
    pub check: ValidationCheck,
}

/// Optional analyzer that can add points after the core analyzers ran. It
/// never vetoes a chart on its own.
pub trait BonusAnalyzer: Send + Sync {
    fn name(&self) -> &str;
    fn max_weight(&self) -> u32;
    fn evaluate(&self, buffer: &PixelBuffer) -> Result<Option<BonusAward>, AnalysisError>;
}

pub struct BonusRuleBuilder {
    rules: Vec<Box<dyn BonusAnalyzer>>,
}

impl BonusRuleBuilder {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(mut self, rule: Box<dyn BonusAnalyzer>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn add_platform_rule(self, config: PlatformConfig) -> Self {
        self.add_rule(Box::new(PlatformBonus::new(config)))
    }

    pub fn add_ticker_rule(self, config: TickerConfig) -> Self {
        self.add_rule(Box::new(TickerBonus::new(config)))
    }

    pub fn build(self) -> Vec<Box<dyn BonusAnalyzer>> {
        self.rules
    }
}

impl Default for BonusRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform then ticker, the default registration order.
pub fn default_rules(config: &Config) -> Vec<Box<dyn BonusAnalyzer>> {
    BonusRuleBuilder::new()
        .add_platform_rule(config.platform.clone())
        .add_ticker_rule(config.ticker.clone())
        .build()
}

pub struct PlatformBonus {
    config: PlatformConfig,
}

impl PlatformBonus {
    pub fn new(config: PlatformConfig) -> Self {
        Self { config }
    }
}

impl BonusAnalyzer for PlatformBonus {
    fn name(&self) -> &str {
        "platform"
    }

    fn max_weight(&self) -> u32 {
        self.config.weight
    }

    fn evaluate(&self, buffer: &PixelBuffer) -> Result<Option<BonusAward>, AnalysisError> {
        let found = detect_platform(buffer, &self.config)?;
        Ok(found.map(|platform| {
            debug!("Platform signature {} ({} matches)", platform.name, platform.matches);
            BonusAward {
                weight: self.config.weight,
                check: ValidationCheck::pass(format!("{} platform detected", platform.name)),
            }
        }))
    }
}

pub struct TickerBonus {
    config: TickerConfig,
}

impl TickerBonus {
    pub fn new(config: TickerConfig) -> Self {
        Self { config }
    }
}

impl BonusAnalyzer for TickerBonus {
    fn name(&self) -> &str {
        "ticker"
    }

    fn max_weight(&self) -> u32 {
        self.config.weight
    }

    fn evaluate(&self, buffer: &PixelBuffer) -> Result<Option<BonusAward>, AnalysisError> {
        let profile = detect_ticker_text(buffer, &self.config)?;
        debug!("Ticker region bright ratio {:.4}", profile.bright_ratio());

        if !profile.has_ticker_text(&self.config) {
            return Ok(None);
        }
        Ok(Some(BonusAward {
            weight: self.config.weight,
            check: ValidationCheck::pass("Ticker/price text detected"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::Rgba;

    #[test]
    fn test_default_rules_order() {
        let rules = default_rules(&Config::default());
        let names: Vec<_> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["platform", "ticker"]);
        assert_eq!(rules.iter().map(|r| r.max_weight()).sum::<u32>(), 25);
    }

    #[test]
    fn test_platform_award_message() {
        let buffer =
            PixelBuffer::from_fn(1000, 500, |_, y| if y < 40 { Rgba::rgb(240, 185, 11) } else { Rgba::rgb(0, 0, 0) })
                .unwrap();
        let award = PlatformBonus::new(PlatformConfig::default()).evaluate(&buffer).unwrap().unwrap();
        assert_eq!(award.weight, 15);
        assert_eq!(award.check.to_string(), "✓ Binance platform detected");
    }

    #[test]
    fn test_ticker_award() {
        let white = PixelBuffer::solid(800, 400, Rgba::rgb(255, 255, 255)).unwrap();
        let award = TickerBonus::new(TickerConfig::default()).evaluate(&white).unwrap().unwrap();
        assert_eq!(award.check.to_string(), "✓ Ticker/price text detected");

        let black = PixelBuffer::solid(800, 400, Rgba::rgb(0, 0, 0)).unwrap();
        assert!(TickerBonus::new(TickerConfig::default()).evaluate(&black).unwrap().is_none());
    }
}
