// Fri Oct 16 2026 - Alex

use crate::pixels::DataUri;
use crate::signal::model::strategies_for;
use crate::signal::{ChartAnalysisService, ServiceError, SignalDirection, TradeSignal};
use crate::utils::format_usd;
use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockServiceConfig {
    /// Payloads whose estimated decoded size is below this are refused.
    pub min_payload_bytes: usize,
    pub latency_ms: u64,
    pub seed: Option<u64>,
    pub base_price_min: u64,
    pub base_price_span: u64,
    pub entry_width: u64,
    pub stop_distance: u64,
    pub target_distance: u64,
}

impl Default for MockServiceConfig {
    fn default() -> Self {
        Self {
            min_payload_bytes: 10_000,
            latency_ms: 0,
            seed: None,
            base_price_min: 40_000,
            base_price_span: 10_000,
            entry_width: 500,
            stop_distance: 1_500,
            target_distance: 3_000,
        }
    }
}

impl MockServiceConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }
}

/// Stand-in for a real chart model: random but plausible signals.
pub struct MockAnalysisService {
    config: MockServiceConfig,
    rng: Mutex<StdRng>,
}

impl MockAnalysisService {
    pub fn new(config: MockServiceConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    pub fn config(&self) -> &MockServiceConfig {
        &self.config
    }

    fn draw(&self) -> TradeSignal {
        let mut rng = self.rng.lock();
        let direction = SignalDirection::ALL[rng.gen_range(0..SignalDirection::ALL.len())];
        let confidence = 75 + rng.gen_range(0..20);
        let base = self.config.base_price_min + rng.gen_range(0..self.config.base_price_span.max(1));

        TradeSignal {
            signal: direction,
            confidence,
            entry: format!(
                "{} - {}",
                format_usd(base),
                format_usd(base + self.config.entry_width)
            ),
            stop_loss: format_usd(base.saturating_sub(self.config.stop_distance)),
            take_profit: format_usd(base + self.config.target_distance),
            strategies: strategies_for(direction),
        }
    }
}

impl Default for MockAnalysisService {
    fn default() -> Self {
        Self::new(MockServiceConfig::default())
    }
}

#[async_trait]
impl ChartAnalysisService for MockAnalysisService {
    async fn analyze(&self, encoded: &str) -> Result<TradeSignal, ServiceError> {
        let uri = DataUri::parse(encoded)?;
        let size = uri.estimated_decoded_len();
        if size < self.config.min_payload_bytes {
            return Err(ServiceError::ImageTooSmall {
                size,
                minimum: self.config.min_payload_bytes,
            });
        }

        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }

        let signal = self.draw();
        debug!("Mock signal {} at {}", signal.signal, signal.confidence_label());
        Ok(signal)
    }
}
