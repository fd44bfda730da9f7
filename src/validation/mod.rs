// Thu Oct 15 2026 - Alex

pub mod gates;
pub mod report;
pub mod result;
pub mod rules;
pub mod validator;

pub use report::{CheckStatus, ValidationCheck};
pub use result::ValidationResult;
pub use rules::{BonusAnalyzer, BonusAward, BonusRuleBuilder};
pub use validator::ChartValidator;
