//! Weighted crop risk index.
//!
//! ```text
//! score = 0.25 * (100 - soilHealth)
//!       + 0.30 * weatherRisk
//!       + 0.25 * pestIncidence
//!       + 0.15 * (100 - irrigationQuality)
//!       + 0.05 * ageBand
//! ```
//!
//! `ageBand` is itself tiered (20 past 90 days, 10 past 60, else 0), so the
//! age term adds at most one point. The band is decided on the unrounded
//! score; the reported score is rounded.

use krishi_types::{RiskAssessment, RiskBreakdown, RiskFactors, RiskLevel};
use tracing::debug;

use crate::confidence::{JitterSource, jittered, round_to_tenth};
use crate::error::{AdvisorError, validate_input};

const SOIL_WEIGHT: f64 = 0.25;
const WEATHER_WEIGHT: f64 = 0.30;
const PEST_WEIGHT: f64 = 0.25;
const IRRIGATION_WEIGHT: f64 = 0.15;
const AGE_WEIGHT: f64 = 0.05;

/// Scores below this are [`RiskLevel::Low`].
pub const LOW_THRESHOLD: f64 = 35.0;
/// Scores below this (and not low) are [`RiskLevel::Medium`].
pub const MEDIUM_THRESHOLD: f64 = 65.0;

const LOW_ACTIONS: [&str; 3] = [
    "Continue current practices",
    "Monitor crop health regularly",
    "Maintain soil nutrition levels",
];

const MEDIUM_ACTIONS: [&str; 4] = [
    "Increase monitoring frequency",
    "Consider preventive pest control",
    "Review irrigation schedule",
    "Test soil health",
];

const HIGH_ACTIONS: [&str; 5] = [
    "Immediate intervention required",
    "Apply pest control measures",
    "Improve soil health urgently",
    "Adjust irrigation immediately",
    "Consider crop insurance",
];

/// Age tier before the outer weight is applied.
const fn age_band(crop_age_days: u32) -> f64 {
    if crop_age_days > 90 {
        20.0
    } else if crop_age_days > 60 {
        10.0
    } else {
        0.0
    }
}

/// Band for an unrounded risk score.
pub fn risk_level(score: f64) -> RiskLevel {
    if score < LOW_THRESHOLD {
        RiskLevel::Low
    } else if score < MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Fixed, ordered actions for a risk band.
pub fn recommendations(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => &LOW_ACTIONS,
        RiskLevel::Medium => &MEDIUM_ACTIONS,
        RiskLevel::High => &HIGH_ACTIONS,
    }
}

/// Unweighted factor contributions.
pub fn breakdown(factors: &RiskFactors) -> RiskBreakdown {
    RiskBreakdown {
        soil: 100.0 - factors.soil_health,
        weather: factors.weather_risk,
        pest: factors.pest_incidence,
        irrigation: 100.0 - factors.irrigation_quality,
    }
}

/// Unrounded weighted risk index.
pub fn risk_score(factors: &RiskFactors) -> f64 {
    let parts = breakdown(factors);
    [
        (SOIL_WEIGHT, parts.soil),
        (WEATHER_WEIGHT, parts.weather),
        (PEST_WEIGHT, parts.pest),
        (IRRIGATION_WEIGHT, parts.irrigation),
        (AGE_WEIGHT, age_band(factors.crop_age)),
    ]
    .iter()
    .map(|(weight, value)| weight * value)
    .sum()
}

/// Score crop risk and attach the band's action list.
///
/// `confidence` is a display placeholder in `[85, 95]` drawn from `jitter`;
/// it does not reflect input quality.
pub fn predict_risk(
    factors: &RiskFactors,
    jitter: &mut impl JitterSource,
) -> Result<RiskAssessment, AdvisorError> {
    validate_input(factors, "RiskFactors")?;

    let score = risk_score(factors);
    let level = risk_level(score);

    // Validated inputs keep the score inside [0, 100].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = score.round().clamp(0.0, 100.0) as u32;

    debug!(score, rounded, ?level, crop_age = factors.crop_age, "risk scored");

    Ok(RiskAssessment {
        risk_level: level,
        risk_score: rounded,
        confidence: round_to_tenth(jittered(85.0, 10.0, jitter)),
        recommendations: recommendations(level).iter().map(|s| (*s).to_owned()).collect(),
        factors: breakdown(factors),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::{FixedJitter, RngJitter};

    fn factors(soil: f64, weather: f64, pest: f64, irrigation: f64, age: u32) -> RiskFactors {
        RiskFactors {
            soil_health: soil,
            weather_risk: weather,
            pest_incidence: pest,
            irrigation_quality: irrigation,
            crop_age: age,
        }
    }

    #[test]
    fn healthy_field_is_low_risk() {
        let result = predict_risk(&factors(75.0, 30.0, 20.0, 80.0, 45), &mut FixedJitter::zero())
            .unwrap_or_else(|e| panic!("valid factors: {e}"));
        assert_eq!(result.risk_score, 23);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.recommendations.len(), 3);
        assert!((result.factors.soil - 25.0).abs() < f64::EPSILON);
        assert!((result.factors.irrigation - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn age_term_adds_at_most_one_point() {
        let young = risk_score(&factors(50.0, 50.0, 50.0, 50.0, 10));
        let mid = risk_score(&factors(50.0, 50.0, 50.0, 50.0, 61));
        let old = risk_score(&factors(50.0, 50.0, 50.0, 50.0, 91));
        assert!((mid - young - 0.5).abs() < 1e-9);
        assert!((old - young - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bands_use_unrounded_score() {
        assert_eq!(risk_level(34.9), RiskLevel::Low);
        assert_eq!(risk_level(35.0), RiskLevel::Medium);
        assert_eq!(risk_level(64.99), RiskLevel::Medium);
        assert_eq!(risk_level(65.0), RiskLevel::High);
    }

    #[test]
    fn worst_case_is_high_with_five_actions() {
        let result = predict_risk(&factors(0.0, 100.0, 100.0, 0.0, 120), &mut FixedJitter::zero())
            .unwrap_or_else(|e| panic!("valid factors: {e}"));
        assert_eq!(result.risk_score, 96);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(
            result.recommendations.first().map(String::as_str),
            Some("Immediate intervention required")
        );
        assert_eq!(result.recommendations.len(), 5);
    }

    #[test]
    fn confidence_stays_in_band() {
        let mut rng = RngJitter::seeded(3);
        for _ in 0..50 {
            let result = predict_risk(&factors(60.0, 40.0, 40.0, 60.0, 70), &mut rng)
                .unwrap_or_else(|e| panic!("valid factors: {e}"));
            assert!((85.0..=95.0).contains(&result.confidence));
        }
    }

    #[test]
    fn scores_above_one_hundred_are_rejected() {
        let result = predict_risk(&factors(120.0, 30.0, 20.0, 80.0, 45), &mut FixedJitter::zero());
        assert!(matches!(result, Err(AdvisorError::InvalidInput { record: "RiskFactors", .. })));
    }
}
