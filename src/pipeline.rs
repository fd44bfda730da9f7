// Fri Oct 16 2026 - Alex

use crate::signal::{ChartAnalysisService, TradeSignal};
use crate::validation::{ChartValidator, ValidationResult};
use log::{info, warn};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Validator refused the image; the analysis service was not called.
    Rejected(ValidationResult),
    Analyzed {
        validation: ValidationResult,
        signal: TradeSignal,
    },
    AnalysisFailed {
        validation: ValidationResult,
        error: String,
    },
}

impl PipelineOutcome {
    pub fn validation(&self) -> &ValidationResult {
        match self {
            PipelineOutcome::Rejected(validation) => validation,
            PipelineOutcome::Analyzed { validation, .. } => validation,
            PipelineOutcome::AnalysisFailed { validation, .. } => validation,
        }
    }

    pub fn signal(&self) -> Option<&TradeSignal> {
        match self {
            PipelineOutcome::Analyzed { signal, .. } => Some(signal),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, PipelineOutcome::Rejected(_))
    }
}

/// Validation in front of the expensive analysis call.
pub struct ChartPipeline {
    validator: Arc<ChartValidator>,
    service: Arc<dyn ChartAnalysisService>,
}

impl ChartPipeline {
    pub fn new(validator: Arc<ChartValidator>, service: Arc<dyn ChartAnalysisService>) -> Self {
        Self { validator, service }
    }

    pub fn validator(&self) -> &ChartValidator {
        &self.validator
    }

    pub async fn submit(&self, encoded: &str) -> PipelineOutcome {
        let validation = self.validator.validate(encoded).await;
        if !validation.is_valid {
            return PipelineOutcome::Rejected(validation);
        }

        match self.service.analyze(encoded).await {
            Ok(signal) => {
                info!("Analysis returned {} ({})", signal.signal, signal.confidence_label());
                PipelineOutcome::Analyzed { validation, signal }
            }
            Err(e) => {
                warn!("Analysis service error: {}", e);
                PipelineOutcome::AnalysisFailed {
                    validation,
                    error: e.user_message().to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testing;
    use crate::pixels::{DataUri, PixelBuffer, Rgba};
    use crate::signal::error::{GENERIC_FAILURE, IMAGE_TOO_SMALL};
    use crate::signal::{MockAnalysisService, MockServiceConfig, ServiceError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingService {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingService {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl ChartAnalysisService for CountingService {
        async fn analyze(&self, encoded: &str) -> Result<TradeSignal, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ServiceError::Failed("model offline".to_string()));
            }
            MockAnalysisService::new(MockServiceConfig {
                min_payload_bytes: 0,
                ..MockServiceConfig::default().with_seed(1)
            })
            .analyze(encoded)
            .await
        }
    }

    fn pipeline(service: Arc<CountingService>) -> ChartPipeline {
        ChartPipeline::new(Arc::new(ChartValidator::default()), service)
    }

    #[tokio::test]
    async fn test_rejected_image_never_reaches_service() {
        let service = CountingService::new(false);
        let flat = testing::png_data_uri(&PixelBuffer::solid(1200, 600, Rgba::rgb(0, 0, 0)).unwrap());

        let outcome = pipeline(service.clone()).submit(&flat).await;
        assert!(outcome.is_rejected());
        assert!(outcome.signal().is_none());

        let outcome = pipeline(service.clone()).submit("garbage").await;
        assert!(outcome.is_rejected());
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_chart_is_analyzed() {
        let service = CountingService::new(false);
        let encoded = testing::png_data_uri(&testing::chart_like(1200, 600));

        let outcome = pipeline(service.clone()).submit(&encoded).await;
        assert!(outcome.validation().is_valid);
        assert!(outcome.signal().is_some());
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_service_error_uses_generic_message() {
        let service = CountingService::new(true);
        let encoded = testing::png_data_uri(&testing::chart_like(1200, 600));

        match pipeline(service).submit(&encoded).await {
            PipelineOutcome::AnalysisFailed { validation, error } => {
                assert!(validation.is_valid);
                assert_eq!(error, GENERIC_FAILURE);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_small_payload_message_passes_through() {
        let buffer = testing::chart_like(1200, 600);
        let encoded = testing::png_data_uri(&buffer);
        let service = MockAnalysisService::new(MockServiceConfig {
            min_payload_bytes: DataUri::parse(&encoded).unwrap().estimated_decoded_len() + 1,
            ..MockServiceConfig::default()
        });
        let pipeline = ChartPipeline::new(Arc::new(ChartValidator::default()), Arc::new(service));

        match pipeline.submit(&encoded).await {
            PipelineOutcome::AnalysisFailed { error, .. } => assert_eq!(error, IMAGE_TOO_SMALL),
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
