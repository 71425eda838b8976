//! Enumeration types shared by every advisory engine.
//!
//! String-keyed lookups coming from the dashboard (crop names, soil types)
//! resolve into these enums through `from_name` constructors that return
//! `None` for unrecognised keys. Each engine then applies its own documented
//! fallback, so table lookups stay exhaustive `match` expressions.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Crops
// ---------------------------------------------------------------------------

/// A field crop known to the recommendation, yield, irrigation and market
/// tables.
///
/// Declaration order is significant: it is the catalog order used to break
/// ties when ranking crop scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Crop {
    /// Paddy rice.
    Rice,
    /// Wheat.
    Wheat,
    /// Cotton.
    Cotton,
    /// Maize (corn).
    Maize,
    /// Sugarcane.
    Sugarcane,
    /// Tomato.
    Tomato,
    /// Potato.
    Potato,
    /// Onion.
    Onion,
    /// Groundnut (peanut).
    Groundnut,
    /// Soybean.
    Soybean,
}

impl Crop {
    /// Every crop in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Rice,
        Self::Wheat,
        Self::Cotton,
        Self::Maize,
        Self::Sugarcane,
        Self::Tomato,
        Self::Potato,
        Self::Onion,
        Self::Groundnut,
        Self::Soybean,
    ];

    /// Lowercase name used by the dashboard and in serialized records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rice => "rice",
            Self::Wheat => "wheat",
            Self::Cotton => "cotton",
            Self::Maize => "maize",
            Self::Sugarcane => "sugarcane",
            Self::Tomato => "tomato",
            Self::Potato => "potato",
            Self::Onion => "onion",
            Self::Groundnut => "groundnut",
            Self::Soybean => "soybean",
        }
    }

    /// Resolve a crop name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for names outside the catalog.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|crop| crop.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host plant selector for the disease catalog.
///
/// This is a separate, smaller set than [`Crop`]: the disease catalog only
/// covers five hosts and keys maize as `corn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum HostCrop {
    /// Tomato (also the fallback catalog).
    Tomato,
    /// Potato.
    Potato,
    /// Wheat.
    Wheat,
    /// Rice.
    Rice,
    /// Corn / maize.
    Corn,
}

impl HostCrop {
    /// Every host in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Tomato,
        Self::Potato,
        Self::Wheat,
        Self::Rice,
        Self::Corn,
    ];

    /// Lowercase host key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tomato => "tomato",
            Self::Potato => "potato",
            Self::Wheat => "wheat",
            Self::Rice => "rice",
            Self::Corn => "corn",
        }
    }

    /// Resolve a host key; `None` when the name is not in the catalog.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|host| host.as_str().eq_ignore_ascii_case(wanted))
    }

    /// Resolve a host key, falling back to [`HostCrop::Tomato`].
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::Tomato)
    }
}

impl fmt::Display for HostCrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Growth stage used to scale daily water demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum CropStage {
    /// Seed germination and emergence.
    Germination,
    /// Leaf and stem growth.
    Vegetative,
    /// Flowering and fruit set.
    Flowering,
    /// Ripening towards harvest.
    Maturity,
}

/// Soil texture class, keyed by the dashboard's soil-type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SoilType {
    /// Sandy soil.
    #[serde(rename = "sandy")]
    Sandy,
    /// Loamy soil (the fallback texture).
    #[serde(rename = "loamy")]
    Loamy,
    /// Clay soil.
    #[serde(rename = "clay")]
    Clay,
    /// Silt loam.
    #[serde(rename = "silt loam")]
    SiltLoam,
}

impl SoilType {
    /// Every soil type.
    pub const ALL: [Self; 4] = [Self::Sandy, Self::Loamy, Self::Clay, Self::SiltLoam];

    /// Dashboard key for the soil type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandy => "sandy",
            Self::Loamy => "loamy",
            Self::Clay => "clay",
            Self::SiltLoam => "silt loam",
        }
    }

    /// Resolve a soil-type key, ignoring case; `None` when unrecognised.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|soil| soil.as_str().eq_ignore_ascii_case(wanted))
    }
}

// ---------------------------------------------------------------------------
// Farmer profile
// ---------------------------------------------------------------------------

/// Landholding class derived from farm size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum LandCategory {
    /// Under 1 hectare.
    Marginal,
    /// 1 to under 2 hectares.
    Small,
    /// 2 hectares or more.
    Large,
}

impl LandCategory {
    /// Classify a landholding: `< 1` marginal, `< 2` small, otherwise large.
    pub fn from_land_size(hectares: f64) -> Self {
        if hectares < 1.0 {
            Self::Marginal
        } else if hectares < 2.0 {
            Self::Small
        } else {
            Self::Large
        }
    }

    /// Lowercase label used in eligibility explanations.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marginal => "marginal",
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

// ---------------------------------------------------------------------------
// Engine verdicts
// ---------------------------------------------------------------------------

/// Severity tier attached to a disease record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Severity {
    /// No disease present.
    None,
    /// Cosmetic or easily contained.
    Low,
    /// Needs treatment.
    Medium,
    /// Threatens the harvest.
    High,
}

/// Crop risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RiskLevel {
    /// Score below 35.
    Low,
    /// Score from 35 to below 65.
    Medium,
    /// Score of 65 or more.
    High,
}

/// Irrigation priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Urgency {
    /// Irrigate within a few days, or not at all.
    Low,
    /// Irrigate within 24 hours.
    Medium,
    /// Irrigate immediately.
    High,
}

/// Qualitative soil moisture reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum MoistureStatus {
    /// Above 60%.
    Adequate,
    /// Above 40% up to 60%.
    Moderate,
    /// 40% or less.
    Low,
}

/// Composite soil fertility bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum FertilityGrade {
    /// Score of 80 or more.
    Excellent,
    /// Score from 65 to 79.
    Good,
    /// Score from 50 to 64.
    Fair,
    /// Score below 50.
    Poor,
}

/// Primary macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Nutrient {
    /// Nitrogen.
    #[serde(rename = "N")]
    Nitrogen,
    /// Phosphorus.
    #[serde(rename = "P")]
    Phosphorus,
    /// Potassium.
    #[serde(rename = "K")]
    Potassium,
}

// ---------------------------------------------------------------------------
// Market and weather
// ---------------------------------------------------------------------------

/// Direction of recent price movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum MarketTrend {
    /// Prices rising.
    Up,
    /// Prices falling.
    Down,
    /// Prices flat.
    Stable,
}

/// Buyer demand level at the mandi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum MarketDemand {
    /// Strong demand.
    High,
    /// Ordinary demand.
    Medium,
    /// Weak demand.
    Low,
}

/// Suggested trading action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum TradeAction {
    /// Sell now.
    Sell,
    /// Hold stock for a better price.
    Hold,
    /// Buy inputs or stock.
    Buy,
}

/// Weather alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum AlertLevel {
    /// Advisory only.
    Info,
    /// Act soon.
    Warning,
    /// Act now.
    Critical,
}
