// Fri Oct 16 2026 - Alex

use crate::signal::{ServiceError, TradeSignal};
use async_trait::async_trait;

/// Downstream analysis that only ever sees images the validator accepted.
#[async_trait]
pub trait ChartAnalysisService: Send + Sync {
    async fn analyze(&self, encoded: &str) -> Result<TradeSignal, ServiceError>;
}
