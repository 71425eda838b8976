//! Crop recommendation by additive range checks.
//!
//! Each of the ten catalog crops carries five weighted checks against the
//! [`CropProfile`]. A crop's score is the sum of the weights whose check
//! passes; weights for every crop sum to 100. All bounds are strict.

use krishi_types::{Crop, CropProfile, CropRecommendation, CropScore};
use tracing::debug;

use crate::error::{AdvisorError, validate_input};

/// Highest confidence ever reported for a recommendation.
pub const MAX_CONFIDENCE: u32 = 98;

/// Exclusive range test.
fn between(value: f64, low: f64, high: f64) -> bool {
    low < value && value < high
}

/// The five `(passed, weight)` checks for one crop.
fn checks(crop: Crop, p: &CropProfile) -> [(bool, u32); 5] {
    match crop {
        Crop::Rice => [
            (p.nitrogen > 80.0, 25),
            (p.rainfall > 150.0, 25),
            (p.humidity > 70.0, 20),
            (between(p.temperature, 20.0, 35.0), 20),
            (between(p.ph, 5.5, 7.5), 10),
        ],
        Crop::Wheat => [
            (between(p.nitrogen, 50.0, 100.0), 25),
            (p.rainfall < 100.0, 25),
            (between(p.temperature, 10.0, 25.0), 25),
            (between(p.ph, 6.0, 7.5), 15),
            (p.phosphorus > 40.0, 10),
        ],
        Crop::Cotton => [
            (p.potassium > 40.0, 25),
            (between(p.rainfall, 50.0, 120.0), 25),
            (between(p.temperature, 25.0, 35.0), 25),
            (p.humidity < 70.0, 15),
            (between(p.ph, 6.0, 8.0), 10),
        ],
        Crop::Maize => [
            (between(p.nitrogen, 60.0, 100.0), 20),
            (between(p.phosphorus, 30.0, 60.0), 20),
            (between(p.potassium, 30.0, 60.0), 20),
            (between(p.rainfall, 60.0, 120.0), 20),
            (between(p.temperature, 20.0, 30.0), 20),
        ],
        Crop::Sugarcane => [
            (p.nitrogen > 100.0, 30),
            (p.rainfall > 150.0, 25),
            (p.temperature > 25.0, 20),
            (p.humidity > 70.0, 15),
            (p.potassium > 50.0, 10),
        ],
        Crop::Tomato => [
            (between(p.nitrogen, 40.0, 80.0), 20),
            (p.phosphorus > 50.0, 25),
            (p.potassium > 40.0, 20),
            (between(p.temperature, 18.0, 28.0), 20),
            (between(p.ph, 6.0, 7.0), 15),
        ],
        Crop::Potato => [
            (p.phosphorus > 60.0, 30),
            (between(p.temperature, 15.0, 25.0), 25),
            (between(p.rainfall, 50.0, 100.0), 20),
            (between(p.ph, 5.0, 6.5), 15),
            (p.potassium > 50.0, 10),
        ],
        Crop::Onion => [
            (p.nitrogen < 60.0, 25),
            (p.phosphorus > 40.0, 20),
            (p.potassium > 40.0, 20),
            (between(p.temperature, 15.0, 30.0), 20),
            (p.rainfall < 80.0, 15),
        ],
        Crop::Groundnut => [
            (p.phosphorus > 50.0, 25),
            (p.rainfall < 100.0, 25),
            (between(p.temperature, 25.0, 35.0), 25),
            (p.potassium > 40.0, 15),
            (between(p.ph, 6.0, 7.0), 10),
        ],
        Crop::Soybean => [
            (between(p.nitrogen, 30.0, 80.0), 20),
            (between(p.phosphorus, 40.0, 80.0), 20),
            (between(p.rainfall, 80.0, 150.0), 25),
            (between(p.temperature, 20.0, 30.0), 20),
            (between(p.ph, 6.0, 7.5), 15),
        ],
    }
}

/// Additive suitability score of one crop, 0 to 100.
pub fn crop_score(crop: Crop, profile: &CropProfile) -> u32 {
    checks(crop, profile)
        .iter()
        .filter(|(passed, _)| *passed)
        .map(|(_, weight)| weight)
        .sum()
}

/// Score every catalog crop and rank them, best first.
///
/// The sort is stable, so equal scores keep catalog order.
pub fn score_crops(profile: &CropProfile) -> [CropScore; 10] {
    let mut ranked = Crop::ALL.map(|crop| {
        let score = crop_score(crop, profile);
        CropScore {
            crop,
            score,
            confidence: score.min(MAX_CONFIDENCE),
        }
    });
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Recommend the best crop for a profile, with the next three as
/// alternatives.
pub fn recommend_crop(profile: &CropProfile) -> Result<CropRecommendation, AdvisorError> {
    validate_input(profile, "CropProfile")?;

    let [best, second, third, fourth, ..] = score_crops(profile);

    debug!(
        crop = best.crop.as_str(),
        score = best.score,
        runner_up = second.crop.as_str(),
        runner_up_score = second.score,
        "crop recommended"
    );

    Ok(CropRecommendation {
        recommended_crop: best.crop,
        confidence: best.confidence,
        alternatives: vec![second, third, fourth],
    })
}
