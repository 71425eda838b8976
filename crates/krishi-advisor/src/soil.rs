//! Soil fertility scoring and corrective advice.
//!
//! The composite score weights six normalized sub-scores:
//! N, P and K at 0.25 each, the pH band at 0.15, organic matter and the
//! moisture band at 0.05 each. Band edges are inclusive.

use krishi_types::{
    FertilityComponents, FertilityGrade, FertilizerGroup, FertilizerOption, Nutrient,
    SoilFertility, SoilParameters, SoilReport,
};
use tracing::debug;

use crate::error::{AdvisorError, validate_input};

/// Nitrogen below this (kg/ha) is deficient.
pub const NITROGEN_DEFICIENT: f64 = 60.0;
/// Phosphorus below this (kg/ha) is deficient.
pub const PHOSPHORUS_DEFICIENT: f64 = 40.0;
/// Potassium below this (kg/ha) is deficient.
pub const POTASSIUM_DEFICIENT: f64 = 40.0;

// ---------------------------------------------------------------------------
// Fertility
// ---------------------------------------------------------------------------

fn capped_percent(value: f64, full_scale: f64) -> f64 {
    (value / full_scale * 100.0).min(100.0)
}

/// pH sub-score: 100 in `[6, 7]`, 75 in `[5.5, 7.5]`, 50 in `[5, 8]`, else 25.
pub fn ph_score(ph: f64) -> f64 {
    if (6.0..=7.0).contains(&ph) {
        100.0
    } else if (5.5..=7.5).contains(&ph) {
        75.0
    } else if (5.0..=8.0).contains(&ph) {
        50.0
    } else {
        25.0
    }
}

/// Moisture sub-score: 100 in `[40, 60]`, 75 in `[30, 70]`, else 50.
pub fn moisture_score(moisture: f64) -> f64 {
    if (40.0..=60.0).contains(&moisture) {
        100.0
    } else if (30.0..=70.0).contains(&moisture) {
        75.0
    } else {
        50.0
    }
}

/// Grade bucket for a rounded fertility score.
pub const fn grade(score: u32) -> FertilityGrade {
    match score {
        80.. => FertilityGrade::Excellent,
        65..=79 => FertilityGrade::Good,
        50..=64 => FertilityGrade::Fair,
        _ => FertilityGrade::Poor,
    }
}

// Sub-scores are all within [0, 100].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

/// Composite fertility score, grade and rounded sub-scores.
pub fn soil_fertility(params: &SoilParameters) -> Result<SoilFertility, AdvisorError> {
    validate_input(params, "SoilParameters")?;

    let n = capped_percent(params.nitrogen, 150.0);
    let p = capped_percent(params.phosphorus, 100.0);
    let k = capped_percent(params.potassium, 100.0);
    let ph = ph_score(params.ph);
    let om = capped_percent(params.organic_matter, 5.0);
    let moisture = moisture_score(params.moisture);

    let composite: f64 = [
        (0.25, n),
        (0.25, p),
        (0.25, k),
        (0.15, ph),
        (0.05, om),
        (0.05, moisture),
    ]
    .iter()
    .map(|(weight, sub)| weight * sub)
    .sum();
    let score = round_score(composite);
    let grade = grade(score);

    debug!(composite, score, ?grade, "soil fertility scored");

    Ok(SoilFertility {
        score,
        grade,
        components: FertilityComponents {
            nitrogen: round_score(n),
            phosphorus: round_score(p),
            potassium: round_score(k),
            ph: round_score(ph),
            organic_matter: round_score(om),
            moisture: round_score(moisture),
        },
    })
}

// ---------------------------------------------------------------------------
// Advice
// ---------------------------------------------------------------------------

/// Ordered corrective actions. Never empty: a soil with nothing to fix
/// gets a single "good condition" entry.
pub fn soil_improvements(params: &SoilParameters) -> Vec<String> {
    let mut actions = Vec::new();

    if params.nitrogen < NITROGEN_DEFICIENT {
        actions.push("Add nitrogen-rich fertilizers (Urea, Ammonium sulfate) or organic sources like compost");
    } else if params.nitrogen > 140.0 {
        actions.push("Reduce nitrogen application to prevent pollution and crop lodging");
    }
    if params.phosphorus < PHOSPHORUS_DEFICIENT {
        actions.push("Apply phosphorus fertilizers (DAP, SSP) or bone meal to improve root development");
    }
    if params.potassium < POTASSIUM_DEFICIENT {
        actions.push("Add potassium fertilizers (Muriate of Potash) or wood ash to enhance disease resistance");
    }
    if params.ph < 5.5 {
        actions.push("Apply agricultural lime to increase pH and reduce soil acidity");
    } else if params.ph > 8.0 {
        actions.push("Apply sulfur or organic matter to reduce alkalinity");
    }
    if params.organic_matter < 2.0 {
        actions.push("Incorporate farmyard manure, compost, or green manure to improve soil structure");
    }
    if actions.is_empty() {
        actions.push("Soil is in good condition. Maintain current practices and monitor regularly");
    }

    actions.into_iter().map(str::to_owned).collect()
}

/// Macronutrients below their deficiency thresholds, in N, P, K order.
pub fn deficient_nutrients(params: &SoilParameters) -> Vec<Nutrient> {
    [
        (Nutrient::Nitrogen, params.nitrogen < NITROGEN_DEFICIENT),
        (Nutrient::Phosphorus, params.phosphorus < PHOSPHORUS_DEFICIENT),
        (Nutrient::Potassium, params.potassium < POTASSIUM_DEFICIENT),
    ]
    .into_iter()
    .filter_map(|(nutrient, deficient)| deficient.then_some(nutrient))
    .collect()
}

struct GroupRecord {
    name: &'static str,
    options: &'static [(&'static str, &'static str, &'static str)],
}

impl GroupRecord {
    fn to_group(&self) -> FertilizerGroup {
        FertilizerGroup {
            name: self.name.to_owned(),
            options: self
                .options
                .iter()
                .map(|(fertilizer, application, benefits)| FertilizerOption {
                    fertilizer: (*fertilizer).to_owned(),
                    application: (*application).to_owned(),
                    benefits: (*benefits).to_owned(),
                })
                .collect(),
        }
    }
}

static NITROGEN_GROUP: GroupRecord = GroupRecord {
    name: "Nitrogen Boosters",
    options: &[
        ("Compost", "Apply 5-10 tons per hectare before planting", "Slow-release nitrogen, improves soil structure"),
        ("Vermicompost", "Apply 2-3 tons per hectare", "High nutrient content, beneficial microorganisms"),
        ("Green Manure (Dhaincha, Sunhemp)", "Grow for 45-60 days then incorporate into soil", "Fixes atmospheric nitrogen, adds organic matter"),
        ("Neem Cake", "250-500 kg per hectare", "Nitrogen source plus pest repellent properties"),
    ],
};

static PHOSPHORUS_GROUP: GroupRecord = GroupRecord {
    name: "Phosphorus Enhancers",
    options: &[
        ("Bone Meal", "200-300 kg per hectare", "Slow-release phosphorus, improves flowering"),
        ("Rock Phosphate", "400-600 kg per hectare", "Long-lasting phosphorus source"),
        ("Fish Bone Meal", "150-250 kg per hectare", "High phosphorus content, trace minerals"),
    ],
};

static POTASSIUM_GROUP: GroupRecord = GroupRecord {
    name: "Potassium Sources",
    options: &[
        ("Wood Ash", "500-1000 kg per hectare", "Potassium and micronutrients, raises pH"),
        ("Banana Peel Compost", "Mix into compost or apply as mulch", "High potassium, improves fruit quality"),
        ("Kelp Meal", "200-400 kg per hectare", "Potassium plus growth hormones"),
    ],
};

static GENERAL_GROUP: GroupRecord = GroupRecord {
    name: "Complete Organic Fertilizers",
    options: &[
        ("Farmyard Manure (FYM)", "10-15 tons per hectare annually", "Balanced NPK, improves soil health"),
        ("Poultry Manure", "3-5 tons per hectare", "High nutrient content, fast-acting"),
        ("Biofertilizers (Rhizobium, Azotobacter)", "Seed treatment or soil application as per packet", "Biological nitrogen fixation, eco-friendly"),
    ],
};

/// Organic fertilizer groups for a deficiency set.
///
/// Groups come in N, P, K order regardless of input order, and the general
/// group is always last.
pub fn fertilizer_groups(deficiencies: &[Nutrient]) -> Vec<FertilizerGroup> {
    [
        (Nutrient::Nitrogen, &NITROGEN_GROUP),
        (Nutrient::Phosphorus, &PHOSPHORUS_GROUP),
        (Nutrient::Potassium, &POTASSIUM_GROUP),
    ]
    .into_iter()
    .filter(|(nutrient, _)| deficiencies.contains(nutrient))
    .map(|(_, group)| group.to_group())
    .chain(std::iter::once(GENERAL_GROUP.to_group()))
    .collect()
}

/// Fertility, corrective actions, deficiencies and fertilizer groups in one
/// report.
pub fn analyze_soil(params: &SoilParameters) -> Result<SoilReport, AdvisorError> {
    let fertility = soil_fertility(params)?;
    let deficiencies = deficient_nutrients(params);
    Ok(SoilReport {
        fertility,
        improvements: soil_improvements(params),
        fertilizers: fertilizer_groups(&deficiencies),
        deficiencies,
    })
}
