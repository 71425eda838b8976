//! Irrigation planning.
//!
//! Daily water need is the crop's base need scaled by three step
//! multipliers (stage, temperature, humidity). Soil moisture then picks one
//! of four exclusive bands, first match wins:
//!
//! | Moisture | Urgency | Water amount                                   |
//! |----------|---------|------------------------------------------------|
//! | < 30     | High    | `(capacity - moisture) / 100 * need * 1.5`      |
//! | < 50     | Medium  | `(capacity - moisture) / 100 * need`            |
//! | < 65     | Low     | `need * 0.5` (field capacity not used)          |
//! | >= 65    | Low     | none                                           |
//!
//! More than 10 mm of recent rain overrides every band: no irrigation, no
//! water, urgency Low.

use krishi_types::{
    Crop, CropStage, IrrigationParameters, IrrigationPlan, MoistureStatus, SoilType,
    StageSchedule, Urgency,
};
use tracing::debug;

use crate::confidence::round_to_tenth;
use crate::error::{AdvisorError, validate_input};

/// Rainfall in millimetres above which irrigation is skipped.
pub const RAIN_OVERRIDE_MM: f64 = 10.0;

const CRITICAL_MOISTURE_ADVICE: [&str; 2] = [
    "Critical moisture level - irrigate immediately to prevent crop stress",
    "Consider installing soil moisture sensors for better monitoring",
];
const DRY_MOISTURE_ADVICE: &str = "Plan irrigation within next 24 hours";
const TIMING_ADVICE: &str =
    "Best time: Early morning (4-8 AM) or evening (5-8 PM) to minimize evaporation";

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Base water need in mm/day; 5.0 for crops outside the table.
pub const fn base_water_need(crop: Option<Crop>) -> f64 {
    match crop {
        Some(Crop::Rice) => 6.5,
        Some(Crop::Wheat | Crop::Onion) => 4.0,
        Some(Crop::Maize) => 5.5,
        Some(Crop::Sugarcane) => 7.0,
        Some(Crop::Potato | Crop::Groundnut) => 4.5,
        Some(Crop::Cotton | Crop::Tomato | Crop::Soybean) | None => 5.0,
    }
}

/// Field capacity in percent; loamy (60) for unrecognised soils.
pub const fn field_capacity(soil: Option<SoilType>) -> f64 {
    match soil {
        Some(SoilType::Sandy) => 40.0,
        Some(SoilType::Clay) => 75.0,
        Some(SoilType::SiltLoam) => 65.0,
        Some(SoilType::Loamy) | None => 60.0,
    }
}

/// Water demand factor for a growth stage.
pub const fn stage_multiplier(stage: CropStage) -> f64 {
    match stage {
        CropStage::Germination => 0.7,
        CropStage::Vegetative => 1.0,
        CropStage::Flowering => 1.3,
        CropStage::Maturity => 0.8,
    }
}

/// Water demand factor for air temperature.
pub fn temperature_multiplier(celsius: f64) -> f64 {
    if celsius > 35.0 {
        1.3
    } else if celsius > 30.0 {
        1.15
    } else if celsius > 25.0 {
        1.0
    } else {
        0.9
    }
}

/// Water demand factor for relative humidity.
pub fn humidity_multiplier(percent: f64) -> f64 {
    if percent < 40.0 {
        1.2
    } else if percent < 60.0 {
        1.0
    } else {
        0.85
    }
}

/// Daily water need in mm for the field's crop and conditions.
pub fn daily_water_need(params: &IrrigationParameters) -> f64 {
    base_water_need(Crop::from_name(&params.crop))
        * stage_multiplier(params.crop_stage)
        * temperature_multiplier(params.temperature)
        * humidity_multiplier(params.humidity)
}

/// Qualitative reading: above 60 adequate, above 40 moderate, else low.
pub fn moisture_status(moisture: f64) -> MoistureStatus {
    if moisture > 60.0 {
        MoistureStatus::Adequate
    } else if moisture > 40.0 {
        MoistureStatus::Moderate
    } else {
        MoistureStatus::Low
    }
}

// ---------------------------------------------------------------------------
// Moisture bands
// ---------------------------------------------------------------------------

/// Soil moisture band, evaluated top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoistureBand {
    Critical,
    Dry,
    Drying,
    Sufficient,
}

impl MoistureBand {
    fn of(moisture: f64) -> Self {
        if moisture < 30.0 {
            Self::Critical
        } else if moisture < 50.0 {
            Self::Dry
        } else if moisture < 65.0 {
            Self::Drying
        } else {
            Self::Sufficient
        }
    }

    const fn urgency(self) -> Urgency {
        match self {
            Self::Critical => Urgency::High,
            Self::Dry => Urgency::Medium,
            Self::Drying | Self::Sufficient => Urgency::Low,
        }
    }

    const fn schedule(self) -> &'static str {
        match self {
            Self::Critical => "Immediate irrigation required",
            Self::Dry => "Irrigate within 24 hours",
            Self::Drying => "Irrigate within 2-3 days",
            Self::Sufficient => "No irrigation needed currently",
        }
    }

    /// Water to apply in mm. A soil already above field capacity gets none.
    fn water_amount(self, capacity: f64, moisture: f64, daily_need: f64) -> f64 {
        let deficit = ((capacity - moisture) / 100.0).max(0.0);
        match self {
            Self::Critical => deficit * daily_need * 1.5,
            Self::Dry => deficit * daily_need,
            Self::Drying => daily_need * 0.5,
            Self::Sufficient => 0.0,
        }
    }
}

/// Ordered field advice: moisture, method, soil, timing.
pub fn recommendations(moisture: f64, crop: Option<Crop>, soil: Option<SoilType>) -> Vec<String> {
    let mut advice: Vec<&str> = Vec::with_capacity(5);

    match MoistureBand::of(moisture) {
        MoistureBand::Critical => advice.extend(CRITICAL_MOISTURE_ADVICE),
        MoistureBand::Dry => advice.push(DRY_MOISTURE_ADVICE),
        MoistureBand::Drying | MoistureBand::Sufficient => {}
    }

    advice.push(match crop {
        Some(Crop::Rice | Crop::Sugarcane) => {
            "Recommended: Flood irrigation or continuous submergence for rice"
        }
        Some(Crop::Tomato | Crop::Potato | Crop::Onion) => {
            "Recommended: Drip irrigation for efficient water use and disease prevention"
        }
        _ => "Recommended: Sprinkler or drip irrigation for water efficiency",
    });

    match soil {
        Some(SoilType::Sandy) => {
            advice.push("Sandy soil: Irrigate more frequently with smaller amounts");
        }
        Some(SoilType::Clay) => {
            advice.push("Clay soil: Irrigate less frequently but with larger amounts");
        }
        _ => {}
    }

    advice.push(TIMING_ADVICE);
    advice.into_iter().map(str::to_owned).collect()
}

/// Decide whether, how urgently and how much to irrigate.
///
/// Unknown crops use a 5 mm/day base need and unknown soils are treated as
/// loamy.
pub fn plan_irrigation(params: &IrrigationParameters) -> Result<IrrigationPlan, AdvisorError> {
    validate_input(params, "IrrigationParameters")?;

    let crop = Crop::from_name(&params.crop);
    let soil = SoilType::from_name(&params.soil_type);
    let daily_need = daily_water_need(params);
    let capacity = field_capacity(soil);
    let band = MoistureBand::of(params.soil_moisture);
    let rain_override = params.rainfall > RAIN_OVERRIDE_MM;

    let (required, urgency, water, schedule) = if rain_override {
        (false, Urgency::Low, 0.0, "Recent rainfall sufficient, skip irrigation")
    } else {
        (
            band != MoistureBand::Sufficient,
            band.urgency(),
            band.water_amount(capacity, params.soil_moisture, daily_need),
            band.schedule(),
        )
    };
    let water_amount = round_to_tenth(water);

    debug!(
        crop = %params.crop,
        moisture = params.soil_moisture,
        ?band,
        rain_override,
        daily_need,
        water_amount,
        "irrigation planned"
    );

    Ok(IrrigationPlan {
        irrigation_required: required,
        urgency,
        water_amount,
        schedule: schedule.to_owned(),
        soil_moisture_status: moisture_status(params.soil_moisture),
        recommendations: recommendations(params.soil_moisture, crop, soil),
    })
}

/// Per-stage watering frequency and depth.
///
/// Tables exist for rice, wheat, cotton and tomato; every other crop uses
/// the wheat table.
pub fn stage_schedule(crop: Option<Crop>, stage: CropStage) -> StageSchedule {
    let (frequency, amount) = match (crop, stage) {
        (Some(Crop::Rice | Crop::Tomato), CropStage::Germination) => ("Daily", "Light watering"),
        (Some(Crop::Rice), CropStage::Vegetative) => {
            ("Continuous submergence", "5-7 cm standing water")
        }
        (Some(Crop::Rice), CropStage::Flowering) => {
            ("Continuous submergence", "5-10 cm standing water")
        }
        (Some(Crop::Rice), CropStage::Maturity) => ("Reduce water", "Drain 2 weeks before harvest"),
        (Some(Crop::Cotton), CropStage::Germination) => ("Every 5-7 days", "40-50 mm"),
        (Some(Crop::Cotton), CropStage::Vegetative) => ("Every 10-12 days", "50-60 mm"),
        (Some(Crop::Cotton), CropStage::Flowering) => ("Every 7-10 days", "60-80 mm"),
        (Some(Crop::Cotton), CropStage::Maturity) => ("Every 12-15 days", "40-50 mm"),
        (Some(Crop::Tomato), CropStage::Vegetative) => ("Every 2-3 days", "25-30 mm"),
        (Some(Crop::Tomato), CropStage::Flowering) => ("Every 2 days", "30-40 mm"),
        (Some(Crop::Tomato), CropStage::Maturity) => ("Every 3-4 days", "20-30 mm"),
        (_, CropStage::Germination) => ("Every 3-4 days", "40-50 mm"),
        (_, CropStage::Vegetative) => ("Every 7-10 days", "50-60 mm"),
        (_, CropStage::Flowering) => ("Every 5-7 days", "60-70 mm"),
        (_, CropStage::Maturity) => ("Stop 10 days before harvest", "0 mm"),
    };
    StageSchedule {
        frequency: frequency.to_owned(),
        amount: amount.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(crop: &str, moisture: f64, rainfall: f64, soil: &str) -> IrrigationParameters {
        IrrigationParameters {
            crop: crop.to_owned(),
            soil_moisture: moisture,
            temperature: 28.0,
            humidity: 50.0,
            rainfall,
            crop_stage: CropStage::Vegetative,
            soil_type: soil.to_owned(),
        }
    }

    fn plan(p: &IrrigationParameters) -> IrrigationPlan {
        plan_irrigation(p).unwrap_or_else(|e| panic!("valid parameters: {e}"))
    }

    #[test]
    fn critical_moisture_uses_capacity_and_boost() {
        // need = 6.5 * 1.0 * 1.0 * 1.0; (60 - 20) / 100 * 6.5 * 1.5 = 3.9
        let result = plan(&params("rice", 20.0, 0.0, "loamy"));
        assert!(result.irrigation_required);
        assert_eq!(result.urgency, Urgency::High);
        assert!((result.water_amount - 3.9).abs() < 1e-9);
        assert_eq!(result.schedule, "Immediate irrigation required");
        assert_eq!(result.soil_moisture_status, MoistureStatus::Low);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn dry_band_drops_the_boost() {
        // (75 - 40) / 100 * 4.0 = 1.4
        let result = plan(&params("wheat", 40.0, 0.0, "clay"));
        assert_eq!(result.urgency, Urgency::Medium);
        assert!((result.water_amount - 1.4).abs() < 1e-9);
    }

    #[test]
    fn drying_band_ignores_field_capacity() {
        let sandy = plan(&params("maize", 55.0, 0.0, "sandy"));
        let clay = plan(&params("maize", 55.0, 0.0, "clay"));
        assert_eq!(sandy.urgency, Urgency::Low);
        assert!((sandy.water_amount - 2.8).abs() < 1e-9);
        assert!((sandy.water_amount - clay.water_amount).abs() < f64::EPSILON);
        assert_eq!(sandy.soil_moisture_status, MoistureStatus::Moderate);
    }

    #[test]
    fn wet_soil_needs_nothing() {
        let result = plan(&params("cotton", 70.0, 0.0, "loamy"));
        assert!(!result.irrigation_required);
        assert!(result.water_amount.abs() < f64::EPSILON);
        assert_eq!(result.schedule, "No irrigation needed currently");
        assert_eq!(result.soil_moisture_status, MoistureStatus::Adequate);
    }

    #[test]
    fn rain_overrides_every_band() {
        for moisture in [5.0, 35.0, 60.0, 90.0] {
            let result = plan(&params("sugarcane", moisture, 12.0, "sandy"));
            assert!(!result.irrigation_required);
            assert!(result.water_amount.abs() < f64::EPSILON);
            assert_eq!(result.urgency, Urgency::Low);
            assert_eq!(result.schedule, "Recent rainfall sufficient, skip irrigation");
        }
    }

    #[test]
    fn soil_above_capacity_gets_no_water() {
        // Sandy capacity 40 is below the 45% reading.
        let result = plan(&params("wheat", 45.0, 0.0, "sandy"));
        assert!(result.irrigation_required);
        assert!(result.water_amount.abs() < f64::EPSILON);
    }

    #[test]
    fn multipliers_compound() {
        let mut p = params("onion", 20.0, 0.0, "loamy");
        p.crop_stage = CropStage::Flowering;
        p.temperature = 36.0;
        p.humidity = 30.0;
        // 4.0 * 1.3 * 1.3 * 1.2
        assert!((daily_water_need(&p) - 8.112).abs() < 1e-9);
    }

    #[test]
    fn advice_follows_crop_and_soil() {
        let advice = recommendations(70.0, Some(Crop::Tomato), Some(SoilType::Clay));
        assert_eq!(
            advice,
            vec![
                "Recommended: Drip irrigation for efficient water use and disease prevention",
                "Clay soil: Irrigate less frequently but with larger amounts",
                TIMING_ADVICE,
            ]
        );
        let advice = recommendations(45.0, None, None);
        assert_eq!(advice.first().map(String::as_str), Some(DRY_MOISTURE_ADVICE));
        assert_eq!(advice.len(), 3);
    }

    #[test]
    fn unknown_soil_and_crop_fall_back() {
        assert!((field_capacity(SoilType::from_name("peat")) - 60.0).abs() < f64::EPSILON);
        assert!((base_water_need(Crop::from_name("millet")) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn schedules_fall_back_to_wheat() {
        let millet = stage_schedule(None, CropStage::Maturity);
        assert_eq!(millet, stage_schedule(Some(Crop::Wheat), CropStage::Maturity));
        assert_eq!(millet.amount, "0 mm");
        let rice = stage_schedule(Some(Crop::Rice), CropStage::Flowering);
        assert_eq!(rice.amount, "5-10 cm standing water");
    }
}
