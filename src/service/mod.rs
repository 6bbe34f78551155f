mod prediction_service;
mod risk_result;

pub use prediction_service::PredictionService;
pub use risk_result::RiskResult;
