//! Input records supplied by dashboard forms.
//!
//! Every record derives [`Validate`] so the engines can reject out-of-domain
//! values (negative land, humidity above 100, pH above 14) with a typed error
//! before scoring. Field names serialize in the dashboard's camelCase, with
//! the nutrient fields keeping their `N`/`P`/`K` keys.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::{Validate, ValidationError};

use crate::enums::{CropStage, LandCategory};

/// Rejects NaN and infinities. Range rules compare with `<` and `>`, which
/// are always false for NaN, so they cannot catch it.
// validator hands custom rules `Copy` fields by value.
fn finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite"))
    }
}

/// Soil nutrient and weather profile for crop recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Validate)]
#[ts(export, export_to = "bindings/")]
pub struct CropProfile {
    /// Available nitrogen in kg/ha.
    #[serde(rename = "N")]
    #[validate(range(min = 0.0, max = 1000.0), custom(function = "finite"))]
    pub nitrogen: f64,
    /// Available phosphorus in kg/ha.
    #[serde(rename = "P")]
    #[validate(range(min = 0.0, max = 1000.0), custom(function = "finite"))]
    pub phosphorus: f64,
    /// Available potassium in kg/ha.
    #[serde(rename = "K")]
    #[validate(range(min = 0.0, max = 1000.0), custom(function = "finite"))]
    pub potassium: f64,
    /// Mean air temperature in degrees Celsius.
    #[validate(range(max = 60.0), custom(function = "finite"))]
    pub temperature: f64,
    /// Relative humidity in percent.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub humidity: f64,
    /// Soil pH.
    #[validate(range(min = 0.0, max = 14.0), custom(function = "finite"))]
    pub ph: f64,
    /// Seasonal rainfall in millimetres.
    #[validate(range(min = 0.0), custom(function = "finite"))]
    pub rainfall: f64,
}

/// Field conditions feeding the crop risk index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Validate)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct RiskFactors {
    /// Soil health rating, 0 (depleted) to 100 (excellent).
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub soil_health: f64,
    /// Weather threat rating, 0 (benign) to 100 (severe).
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub weather_risk: f64,
    /// Observed pest pressure, 0 to 100.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub pest_incidence: f64,
    /// Irrigation reliability rating, 0 to 100.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub irrigation_quality: f64,
    /// Days since sowing.
    pub crop_age: u32,
}

/// Crop, area and management quality for yield and profit estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Validate)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct YieldParameters {
    /// Crop name; unknown names use the fallback yield and price.
    pub crop: String,
    /// Cultivated area in hectares.
    #[validate(range(min = 0.0), custom(function = "finite"))]
    pub land_area: f64,
    /// Soil quality rating, 0 to 100.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub soil_quality: f64,
    /// Irrigation rating, 0 to 100.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub irrigation_score: f64,
    /// Fertilization rating, 0 to 100.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub fertilization_score: f64,
    /// Season weather rating, 0 to 100.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub weather_score: f64,
}

/// Field state for the irrigation planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Validate)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct IrrigationParameters {
    /// Crop name; unknown names use the fallback water need.
    pub crop: String,
    /// Volumetric soil moisture in percent.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub soil_moisture: f64,
    /// Air temperature in degrees Celsius.
    #[validate(range(max = 60.0), custom(function = "finite"))]
    pub temperature: f64,
    /// Relative humidity in percent.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub humidity: f64,
    /// Recent rainfall in millimetres.
    #[validate(range(min = 0.0), custom(function = "finite"))]
    pub rainfall: f64,
    /// Current growth stage.
    pub crop_stage: CropStage,
    /// Soil texture key; unknown keys are treated as loamy.
    pub soil_type: String,
}

/// Soil test results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Validate)]
#[ts(export, export_to = "bindings/")]
pub struct SoilParameters {
    /// Available nitrogen in kg/ha.
    #[serde(rename = "N")]
    #[validate(range(min = 0.0, max = 1000.0), custom(function = "finite"))]
    pub nitrogen: f64,
    /// Available phosphorus in kg/ha.
    #[serde(rename = "P")]
    #[validate(range(min = 0.0, max = 1000.0), custom(function = "finite"))]
    pub phosphorus: f64,
    /// Available potassium in kg/ha.
    #[serde(rename = "K")]
    #[validate(range(min = 0.0, max = 1000.0), custom(function = "finite"))]
    pub potassium: f64,
    /// Soil pH.
    #[serde(rename = "pH")]
    #[validate(range(min = 0.0, max = 14.0), custom(function = "finite"))]
    pub ph: f64,
    /// Organic matter content in percent.
    #[serde(rename = "organicMatter")]
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub organic_matter: f64,
    /// Soil moisture in percent.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub moisture: f64,
}

/// Farmer details used for scheme eligibility.
///
/// The land category is not supplied by the caller; it is always derived
/// from `land_size` through [`FarmerProfile::category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Validate)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct FarmerProfile {
    /// Total landholding in hectares.
    #[validate(range(min = 0.0), custom(function = "finite"))]
    pub land_size: f64,
    /// Whether the farmer holds title to the land.
    pub land_ownership: bool,
    /// Age in years, when known.
    #[serde(default)]
    #[validate(range(max = 120))]
    pub age: Option<u32>,
    /// Whether the farm is under organic practice.
    #[serde(default)]
    pub organic_farming: bool,
    /// Whether the farmer currently has a crop loan.
    #[serde(default)]
    pub loan_taken: bool,
}

impl FarmerProfile {
    /// Landholding class derived from [`FarmerProfile::land_size`].
    pub fn category(&self) -> LandCategory {
        LandCategory::from_land_size(self.land_size)
    }
}

/// Current conditions reported by the weather collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Validate)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CurrentWeather {
    /// Air temperature in degrees Celsius.
    #[validate(range(max = 60.0), custom(function = "finite"))]
    pub temperature: f64,
    /// Relative humidity in percent.
    #[validate(range(min = 0.0, max = 100.0), custom(function = "finite"))]
    pub humidity: f64,
    /// Rainfall today in millimetres.
    #[validate(range(min = 0.0), custom(function = "finite"))]
    pub rainfall: f64,
    /// Wind speed in km/h.
    #[validate(range(min = 0.0), custom(function = "finite"))]
    pub wind_speed: f64,
    /// Surface pressure in hPa.
    #[validate(custom(function = "finite"))]
    pub pressure: f64,
    /// Free-text sky condition, e.g. "Partly Cloudy".
    pub condition: String,
}

/// One day of the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Validate)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ForecastDay {
    /// Day label, e.g. "Tomorrow".
    pub day: String,
    /// Expected temperature in degrees Celsius.
    #[validate(range(max = 60.0), custom(function = "finite"))]
    pub temperature: f64,
    /// Free-text sky condition.
    pub condition: String,
    /// Expected rainfall in millimetres.
    #[validate(range(min = 0.0), custom(function = "finite"))]
    pub rainfall: f64,
}

/// Current conditions plus the coming days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Validate)]
#[ts(export, export_to = "bindings/")]
pub struct WeatherSnapshot {
    /// Conditions right now.
    #[validate(nested)]
    pub current: CurrentWeather,
    /// Upcoming days, nearest first.
    #[validate(nested)]
    pub forecast: Vec<ForecastDay>,
}
