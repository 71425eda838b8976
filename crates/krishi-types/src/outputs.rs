//! Result records produced by the advisory engines.
//!
//! These are owned, serializable values consumed by the dashboard's result
//! panels and by the history collaborator. Monetary amounts are
//! [`Decimal`] rupees; they cross into `TypeScript` as strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    AlertLevel, Crop, FertilityGrade, LandCategory, MarketDemand, MarketTrend, MoistureStatus,
    Nutrient, RiskLevel, Severity, TradeAction, Urgency,
};

// ---------------------------------------------------------------------------
// Disease
// ---------------------------------------------------------------------------

/// Outcome of the colour-heuristic disease classifier.
///
/// `confidence` is a heuristic display value (base plus bounded jitter), not
/// a calibrated probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DiseaseDiagnosis {
    /// Disease name, or `"Healthy"`.
    pub disease: String,
    /// Heuristic confidence in percent, one decimal place.
    pub confidence: f64,
    /// Treatment advice.
    pub solution: String,
    /// Prevention advice.
    pub prevention: String,
    /// Severity tier.
    pub severity: Severity,
    /// Visible symptoms of the selected disease.
    pub symptoms: Vec<String>,
}

// ---------------------------------------------------------------------------
// Crop recommendation
// ---------------------------------------------------------------------------

/// Score of one crop against a [`CropProfile`](crate::CropProfile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CropScore {
    /// The scored crop.
    pub crop: Crop,
    /// Additive rule score, 0 to 100.
    pub score: u32,
    /// Display confidence, `min(98, score)`.
    pub confidence: u32,
}

/// Best crop plus the three runners-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CropRecommendation {
    /// Highest-scoring crop.
    pub recommended_crop: Crop,
    /// Confidence of the recommended crop.
    pub confidence: u32,
    /// Ranks two to four.
    pub alternatives: Vec<CropScore>,
}

// ---------------------------------------------------------------------------
// Risk
// ---------------------------------------------------------------------------

/// Per-factor risk contributions before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RiskBreakdown {
    /// `100 - soilHealth`.
    pub soil: f64,
    /// Weather risk as supplied.
    pub weather: f64,
    /// Pest incidence as supplied.
    pub pest: f64,
    /// `100 - irrigationQuality`.
    pub irrigation: f64,
}

/// Weighted crop risk verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct RiskAssessment {
    /// Risk band.
    pub risk_level: RiskLevel,
    /// Weighted risk index rounded to an integer, 0 to 100.
    pub risk_score: u32,
    /// Heuristic display confidence in `[85, 95]`; independent of input.
    pub confidence: f64,
    /// Ordered actions for the risk band.
    pub recommendations: Vec<String>,
    /// Unweighted factor contributions.
    pub factors: RiskBreakdown,
}

// ---------------------------------------------------------------------------
// Yield
// ---------------------------------------------------------------------------

/// Estimated harvest and its economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct YieldEstimate {
    /// Total harvest in quintals, one decimal place.
    pub estimated_yield: f64,
    /// Unit of `estimated_yield`.
    pub unit: String,
    /// Gross revenue in whole rupees.
    #[ts(as = "String")]
    pub revenue: Decimal,
    /// Cultivation cost in whole rupees.
    #[ts(as = "String")]
    pub cost: Decimal,
    /// Revenue minus cost in whole rupees; negative for a loss.
    #[ts(as = "String")]
    pub profit: Decimal,
    /// Market price used, rupees per quintal.
    #[ts(as = "String")]
    pub price_per_quintal: Decimal,
    /// `75 + round(20 * qualityMultiplier)`.
    pub confidence: u32,
    /// Profit as a percentage of revenue; `None` when revenue is zero.
    #[ts(as = "Option<String>")]
    pub profit_margin_pct: Option<Decimal>,
    /// Quintals per hectare; `None` when the land area is zero.
    pub yield_per_hectare: Option<f64>,
}

// ---------------------------------------------------------------------------
// Irrigation
// ---------------------------------------------------------------------------

/// Irrigation decision for a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct IrrigationPlan {
    /// Whether water should be applied.
    pub irrigation_required: bool,
    /// Priority tier.
    pub urgency: Urgency,
    /// Water to apply in millimetres, one decimal place.
    pub water_amount: f64,
    /// Human-readable timing instruction.
    pub schedule: String,
    /// Qualitative moisture reading.
    pub soil_moisture_status: MoistureStatus,
    /// Ordered field advice.
    pub recommendations: Vec<String>,
}

/// Watering frequency and depth for one crop stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StageSchedule {
    /// How often to irrigate.
    pub frequency: String,
    /// How much to apply.
    pub amount: String,
}

// ---------------------------------------------------------------------------
// Soil
// ---------------------------------------------------------------------------

/// Normalized sub-scores behind a fertility score, each 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct FertilityComponents {
    /// Nitrogen sub-score.
    pub nitrogen: u32,
    /// Phosphorus sub-score.
    pub phosphorus: u32,
    /// Potassium sub-score.
    pub potassium: u32,
    /// pH band sub-score.
    #[serde(rename = "pH")]
    pub ph: u32,
    /// Organic matter sub-score.
    pub organic_matter: u32,
    /// Moisture band sub-score.
    pub moisture: u32,
}

/// Composite soil fertility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SoilFertility {
    /// Weighted score, 0 to 100.
    pub score: u32,
    /// Grade bucket for `score`.
    pub grade: FertilityGrade,
    /// Rounded sub-scores.
    pub components: FertilityComponents,
}

/// One organic fertilizer suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FertilizerOption {
    /// Product or practice name.
    pub fertilizer: String,
    /// Application rate and timing.
    pub application: String,
    /// Expected benefit.
    pub benefits: String,
}

/// Fertilizer options grouped by the nutrient they supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FertilizerGroup {
    /// Group heading.
    pub name: String,
    /// Options in the group.
    pub options: Vec<FertilizerOption>,
}

/// Full soil analysis: fertility, corrective actions and fertilizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SoilReport {
    /// Composite fertility.
    pub fertility: SoilFertility,
    /// Ordered corrective actions.
    pub improvements: Vec<String>,
    /// Macronutrients below their deficiency thresholds.
    pub deficiencies: Vec<Nutrient>,
    /// Suggested organic fertilizer groups.
    pub fertilizers: Vec<FertilizerGroup>,
}

// ---------------------------------------------------------------------------
// Schemes
// ---------------------------------------------------------------------------

/// A catalog scheme paired with the reason it does or does not apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SchemeOutcome {
    /// Stable scheme key, e.g. `pm-kisan`.
    pub id: String,
    /// Full scheme name.
    pub name: String,
    /// What the scheme does.
    pub description: String,
    /// Benefit summary.
    pub benefits: String,
    /// Documents needed to apply.
    pub documents: Vec<String>,
    /// Application instructions.
    pub how_to_apply: String,
    /// Scheme family, e.g. "Insurance".
    pub category: String,
    /// Why the farmer is or is not eligible.
    pub reason: String,
}

/// Partition of the scheme catalog for one farmer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EligibilityReport {
    /// Land category derived from the profile.
    pub land_category: LandCategory,
    /// Schemes whose every predicate passed.
    pub eligible: Vec<SchemeOutcome>,
    /// Schemes with at least one failed predicate.
    pub ineligible: Vec<SchemeOutcome>,
}

// ---------------------------------------------------------------------------
// Market and weather
// ---------------------------------------------------------------------------

/// Monthly closing price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PricePoint {
    /// Short month label, e.g. `"Jan"`.
    pub month: String,
    /// Price in rupees per quintal.
    #[ts(as = "String")]
    pub price: Decimal,
}

/// Current mandi quote for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct MarketQuote {
    /// Display name of the crop, e.g. `"Rice"`.
    pub crop: String,
    /// Current price in rupees per quintal.
    #[ts(as = "String")]
    pub current_price: Decimal,
    /// Trading unit.
    pub unit: String,
    /// Recent change in percent; negative when falling.
    pub change: f64,
    /// Direction of recent movement.
    pub trend: MarketTrend,
    /// Minimum support price; zero when the crop has none.
    #[ts(as = "String")]
    pub msp: Decimal,
    /// Buyer demand.
    pub market_demand: MarketDemand,
    /// Recent monthly prices, oldest first.
    pub price_history: Vec<PricePoint>,
}

/// A sell/hold suggestion for one crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MarketAdvice {
    /// Suggested action.
    #[serde(rename = "type")]
    pub action: TradeAction,
    /// Display name of the crop.
    pub crop: String,
    /// Explanation shown to the farmer.
    pub reason: String,
}

/// Projected price for a future month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PriceForecast {
    /// Label such as `"Month 1"`.
    pub month: String,
    /// Projected price in whole rupees per quintal.
    #[ts(as = "String")]
    pub predicted_price: Decimal,
    /// Heuristic confidence, shrinking with the horizon.
    pub confidence: u32,
}

/// Actionable weather alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WeatherAlert {
    /// Alert severity.
    #[serde(rename = "type")]
    pub level: AlertLevel,
    /// Short heading.
    pub title: String,
    /// What is happening.
    pub message: String,
    /// What the farmer should do.
    pub action: String,
}
