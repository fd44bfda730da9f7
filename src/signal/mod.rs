// Fri Oct 16 2026 - Alex

pub mod error;
pub mod mock;
pub mod model;
pub mod service;

pub use error::ServiceError;
pub use mock::{MockAnalysisService, MockServiceConfig};
pub use model::{SignalDirection, StrategyNote, TradeSignal};
pub use service::ChartAnalysisService;
