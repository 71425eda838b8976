//! Harvest and profit estimation.
//!
//! The quality multiplier blends the four field scores (weights 0.30, 0.25,
//! 0.25, 0.20). Yield is `baseYield * landArea * (0.5 + quality)`; the 0.5
//! floor keeps a poorly managed field above zero. Money is carried as
//! [`Decimal`] rupees and rounded to whole rupees with ties toward positive
//! infinity, matching how the dashboard rounds (a loss of 2.5 shows as 2).

use krishi_types::{Crop, YieldEstimate, YieldParameters};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::confidence::round_to_tenth;
use crate::error::{AdvisorError, validate_input};

/// Cultivation cost per hectare in rupees.
pub const COST_PER_HECTARE: Decimal = Decimal::from_parts(25_000, 0, 0, false, 0);

/// Unit of every yield estimate.
pub const YIELD_UNIT: &str = "quintals";

/// Yield floor applied before the quality multiplier.
const QUALITY_FLOOR: f64 = 0.5;

/// Base yield in quintals per hectare; 25 for crops outside the table.
pub const fn base_yield(crop: Option<Crop>) -> f64 {
    match crop {
        Some(Crop::Rice) => 35.0,
        Some(Crop::Wheat) => 30.0,
        Some(Crop::Cotton) => 18.0,
        Some(Crop::Maize) => 28.0,
        Some(Crop::Sugarcane) => 350.0,
        Some(Crop::Tomato) => 250.0,
        Some(Crop::Potato) => 220.0,
        Some(Crop::Onion) => 200.0,
        Some(Crop::Groundnut) => 20.0,
        Some(Crop::Soybean) => 25.0,
        None => 25.0,
    }
}

/// Market price in rupees per quintal; 2000 for crops outside the table.
pub fn price_per_quintal(crop: Option<Crop>) -> Decimal {
    let rupees: u32 = match crop {
        Some(Crop::Rice) => 2100,
        Some(Crop::Wheat) => 2000,
        Some(Crop::Cotton) => 5500,
        Some(Crop::Maize | Crop::Onion) => 1800,
        Some(Crop::Sugarcane) => 300,
        Some(Crop::Tomato) => 1500,
        Some(Crop::Potato) => 1200,
        Some(Crop::Groundnut) => 5000,
        Some(Crop::Soybean) => 3800,
        None => 2000,
    };
    Decimal::from(rupees)
}

/// Weighted blend of the four field scores, in `[0, 1]`.
pub fn quality_multiplier(params: &YieldParameters) -> f64 {
    [
        (0.30, params.soil_quality),
        (0.25, params.irrigation_score),
        (0.25, params.fertilization_score),
        (0.20, params.weather_score),
    ]
    .iter()
    .map(|(weight, score)| weight * score / 100.0)
    .sum()
}

fn to_rupees(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    // normalize() turns a rounded -0 into 0.
    value.round_dp_with_strategy(0, strategy).normalize()
}

fn to_decimal(value: f64, context: &'static str) -> Result<Decimal, AdvisorError> {
    Decimal::from_f64(value).ok_or(AdvisorError::NonFiniteValue { context })
}

/// Estimate harvest, revenue, cost and profit for a field.
///
/// Unknown crop names use the fallback yield and price. Profit is not
/// clamped and is negative for a loss.
pub fn estimate_yield(params: &YieldParameters) -> Result<YieldEstimate, AdvisorError> {
    validate_input(params, "YieldParameters")?;

    let crop = Crop::from_name(&params.crop);
    let quality = quality_multiplier(params);
    let total_yield = base_yield(crop) * params.land_area * (QUALITY_FLOOR + quality);
    let price = price_per_quintal(crop);

    let revenue = to_decimal(total_yield, "revenue")?
        .checked_mul(price)
        .ok_or(AdvisorError::NonFiniteValue { context: "revenue" })?;
    let cost = to_decimal(params.land_area, "cost")?
        .checked_mul(COST_PER_HECTARE)
        .ok_or(AdvisorError::NonFiniteValue { context: "cost" })?;
    let profit = revenue
        .checked_sub(cost)
        .map(to_rupees)
        .ok_or(AdvisorError::NonFiniteValue { context: "profit" })?;
    let revenue = to_rupees(revenue);
    let cost = to_rupees(cost);

    let profit_margin_pct = profit
        .checked_div(revenue)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp(1));
    let estimated_yield = round_to_tenth(total_yield);
    let yield_per_hectare =
        (params.land_area > 0.0).then(|| round_to_tenth(total_yield / params.land_area));

    // quality is in [0, 1], so the bonus is 0..=20.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let confidence = 75_u32.saturating_add((quality * 20.0).round() as u32);

    debug!(
        crop = %params.crop,
        known_crop = crop.is_some(),
        quality,
        estimated_yield,
        %revenue,
        %profit,
        "yield estimated"
    );

    Ok(YieldEstimate {
        estimated_yield,
        unit: YIELD_UNIT.to_owned(),
        revenue,
        cost,
        profit,
        price_per_quintal: price,
        confidence,
        profit_margin_pct,
        yield_per_hectare,
    })
}
