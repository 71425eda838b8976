//! Shared type definitions for the Krishi advisory engines.
//!
//! This crate is the single source of truth for the values exchanged between
//! the dashboard and the rule engines. Types flow downstream to `TypeScript`
//! via `ts-rs` so the form and result panels stay in step with the engines.
//!
//! # Modules
//!
//! - [`enums`] -- Crops, soil textures, stages, and the categorical verdicts
//!   (severity, risk level, urgency, grade)
//! - [`inputs`] -- Validated input records filled in by dashboard forms
//! - [`outputs`] -- Result records returned by the engines

pub mod enums;
pub mod inputs;
pub mod outputs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    AlertLevel, Crop, CropStage, FertilityGrade, HostCrop, LandCategory, MarketDemand,
    MarketTrend, MoistureStatus, Nutrient, RiskLevel, Severity, SoilType, TradeAction, Urgency,
};
pub use inputs::{
    CropProfile, CurrentWeather, FarmerProfile, ForecastDay, IrrigationParameters, RiskFactors,
    SoilParameters, WeatherSnapshot, YieldParameters,
};
pub use outputs::{
    CropRecommendation, CropScore, DiseaseDiagnosis, EligibilityReport, FertilityComponents,
    FertilizerGroup, FertilizerOption, IrrigationPlan, MarketAdvice, MarketQuote, PriceForecast,
    PricePoint, RiskAssessment, RiskBreakdown, SchemeOutcome, SoilFertility, SoilReport, StageSchedule,
    WeatherAlert, YieldEstimate,
};

#[cfg(test)]
mod tests {
    //! Binding generation for the dashboard.

    #[test]
    fn export_bindings() {
        // ts-rs writes the TypeScript files into `bindings/` relative to the
        // crate root when the exported types are touched.
        use ts_rs::TS;

        let _ = crate::CropProfile::export_all();
        let _ = crate::RiskFactors::export_all();
        let _ = crate::YieldParameters::export_all();
        let _ = crate::IrrigationParameters::export_all();
        let _ = crate::SoilParameters::export_all();
        let _ = crate::FarmerProfile::export_all();
        let _ = crate::WeatherSnapshot::export_all();

        let _ = crate::DiseaseDiagnosis::export_all();
        let _ = crate::CropRecommendation::export_all();
        let _ = crate::RiskAssessment::export_all();
        let _ = crate::YieldEstimate::export_all();
        let _ = crate::IrrigationPlan::export_all();
        let _ = crate::SoilReport::export_all();
        let _ = crate::EligibilityReport::export_all();
        let _ = crate::MarketQuote::export_all();
        let _ = crate::MarketAdvice::export_all();
        let _ = crate::PriceForecast::export_all();
        let _ = crate::WeatherAlert::export_all();
    }
}
