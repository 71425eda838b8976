//! Colour-heuristic disease classifier.
//!
//! There is no trained model here. A leaf photo is reduced to four colour
//! ratios ([`ImageStatistics`]) and an ordered cascade picks a catalog entry
//! for the host crop. The first matching rule wins:
//!
//! 1. green > 0.50 -- healthy
//! 2. brown > 0.15 and dark > 0.10 -- catalog entry 0 (blight class)
//! 3. yellow > 0.20 -- last catalog entry (bacterial / nutrient class)
//! 4. dark > 0.15 -- entry `min(2, len - 1)` (fungal class)
//! 5. otherwise -- entry `min(1, len - 1)` (mixed symptoms)
//!
//! Every index is clamped to the catalog length, so short catalogs never
//! index out of bounds. Confidence is a per-rule base plus bounded jitter.

use krishi_types::{DiseaseDiagnosis, HostCrop, Severity};
use tracing::debug;

use crate::confidence::{JitterSource, jittered, round_to_tenth};
use crate::error::AdvisorError;
use crate::pixels::ImageStatistics;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable reference entry for one plant disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiseaseRecord {
    /// Disease name.
    pub name: &'static str,
    /// Typical visible symptoms.
    pub symptoms: &'static [&'static str],
    /// Treatment advice.
    pub solution: &'static str,
    /// Prevention advice.
    pub prevention: &'static str,
    /// Severity tier.
    pub severity: Severity,
}

impl DiseaseRecord {
    fn to_diagnosis(self, confidence: f64) -> DiseaseDiagnosis {
        DiseaseDiagnosis {
            disease: self.name.to_owned(),
            confidence,
            solution: self.solution.to_owned(),
            prevention: self.prevention.to_owned(),
            severity: self.severity,
            symptoms: self.symptoms.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Record returned when the leaf is predominantly green.
pub const HEALTHY: DiseaseRecord = DiseaseRecord {
    name: "Healthy",
    symptoms: &["Normal green leaves", "No visible damage"],
    solution: "Continue regular care and monitoring",
    prevention: "Maintain proper watering, fertilization, and pest control",
    severity: Severity::None,
};

static TOMATO: [DiseaseRecord; 4] = [
    DiseaseRecord {
        name: "Early Blight",
        symptoms: &["brown spots", "dark rings", "leaf yellowing"],
        solution: "Remove infected leaves, apply copper-based fungicide, ensure proper spacing for air circulation",
        prevention: "Crop rotation, mulching, avoid overhead watering, use disease-resistant varieties",
        severity: Severity::Medium,
    },
    DiseaseRecord {
        name: "Late Blight",
        symptoms: &["water-soaked spots", "white mold", "rapid wilting"],
        solution: "Apply fungicide immediately, remove infected plants, improve drainage",
        prevention: "Use resistant varieties, avoid wet foliage, proper plant spacing",
        severity: Severity::High,
    },
    DiseaseRecord {
        name: "Leaf Mold",
        symptoms: &["yellow spots", "olive-green mold", "leaf curling"],
        solution: "Reduce humidity, improve ventilation, apply appropriate fungicide",
        prevention: "Control humidity, ensure good air flow, use resistant varieties",
        severity: Severity::Medium,
    },
    DiseaseRecord {
        name: "Bacterial Spot",
        symptoms: &["small dark spots", "yellow halos", "leaf drop"],
        solution: "Remove infected parts, apply copper spray, avoid overhead irrigation",
        prevention: "Use certified seeds, crop rotation, drip irrigation",
        severity: Severity::Medium,
    },
];

static POTATO: [DiseaseRecord; 2] = [
    DiseaseRecord {
        name: "Early Blight",
        symptoms: &["concentric rings", "brown lesions", "leaf death"],
        solution: "Apply chlorothalonil fungicide, remove infected foliage, ensure proper nutrition",
        prevention: "Crop rotation, use healthy seed potatoes, avoid water stress",
        severity: Severity::Medium,
    },
    DiseaseRecord {
        name: "Late Blight",
        symptoms: &["water-soaked lesions", "white growth", "tuber rot"],
        solution: "Immediate fungicide application, destroy infected plants, harvest early if needed",
        prevention: "Use resistant varieties, fungicide program, proper storage",
        severity: Severity::High,
    },
];

static WHEAT: [DiseaseRecord; 2] = [
    DiseaseRecord {
        name: "Rust",
        symptoms: &["orange pustules", "yellow spots", "reduced yield"],
        solution: "Apply triazole fungicide, remove volunteer plants, harvest timely",
        prevention: "Use resistant varieties, crop rotation, proper fertilization",
        severity: Severity::High,
    },
    DiseaseRecord {
        name: "Powdery Mildew",
        symptoms: &["white powder", "leaf distortion", "stunted growth"],
        solution: "Apply sulfur-based fungicide, improve air circulation",
        prevention: "Resistant varieties, avoid excess nitrogen, proper spacing",
        severity: Severity::Medium,
    },
];

static RICE: [DiseaseRecord; 2] = [
    DiseaseRecord {
        name: "Blast",
        symptoms: &["diamond-shaped lesions", "neck rot", "grain discoloration"],
        solution: "Apply tricyclazole fungicide, improve field drainage, balance fertilization",
        prevention: "Use resistant varieties, avoid excess nitrogen, proper water management",
        severity: Severity::High,
    },
    DiseaseRecord {
        name: "Bacterial Leaf Blight",
        symptoms: &["water-soaked lesions", "yellowing", "wilting"],
        solution: "Use copper-based bactericide, improve drainage, remove infected plants",
        prevention: "Use certified seeds, crop rotation, balanced fertilization",
        severity: Severity::Medium,
    },
];

static CORN: [DiseaseRecord; 2] = [
    DiseaseRecord {
        name: "Northern Leaf Blight",
        symptoms: &["gray-green lesions", "cigar-shaped spots", "premature death"],
        solution: "Apply fungicide at first sign, remove crop residue, hybrid rotation",
        prevention: "Use resistant hybrids, crop rotation, timely planting",
        severity: Severity::Medium,
    },
    DiseaseRecord {
        name: "Common Rust",
        symptoms: &["reddish-brown pustules", "yellowing", "early senescence"],
        solution: "Apply fungicide if severe, monitor weather conditions",
        prevention: "Plant resistant hybrids, avoid late planting",
        severity: Severity::Low,
    },
];

/// Read-only disease catalog for a host crop.
pub fn catalog(host: HostCrop) -> &'static [DiseaseRecord] {
    match host {
        HostCrop::Tomato => &TOMATO,
        HostCrop::Potato => &POTATO,
        HostCrop::Wheat => &WHEAT,
        HostCrop::Rice => &RICE,
        HostCrop::Corn => &CORN,
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Which rule of the cascade matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourFinding {
    /// Mostly green foliage.
    Healthy,
    /// Brown and dark patches together.
    Blight,
    /// Yellow dominant.
    Yellowing,
    /// Dark lesions without much brown.
    DarkLesions,
    /// None of the above.
    Mixed,
}

impl ColourFinding {
    /// Evaluate the cascade top to bottom; first match wins.
    pub fn classify(stats: &ImageStatistics) -> Self {
        if stats.green_ratio() > 0.5 {
            Self::Healthy
        } else if stats.brown_ratio() > 0.15 && stats.dark_ratio() > 0.1 {
            Self::Blight
        } else if stats.yellow_ratio() > 0.2 {
            Self::Yellowing
        } else if stats.dark_ratio() > 0.15 {
            Self::DarkLesions
        } else {
            Self::Mixed
        }
    }

    /// `(base, span)` of the heuristic confidence for this finding.
    const fn confidence_band(self) -> (f64, f64) {
        match self {
            Self::Healthy => (92.0, 5.0),
            Self::Blight => (85.0, 10.0),
            Self::Yellowing => (80.0, 12.0),
            Self::DarkLesions => (82.0, 10.0),
            Self::Mixed => (75.0, 15.0),
        }
    }

    /// Catalog record for this finding, with the index clamped to the
    /// catalog length.
    fn record(self, diseases: &'static [DiseaseRecord]) -> DiseaseRecord {
        let last = diseases.len().saturating_sub(1);
        let index = match self {
            Self::Healthy => return HEALTHY,
            Self::Blight => 0,
            Self::Yellowing => last,
            Self::DarkLesions => 2_usize.min(last),
            Self::Mixed => 1_usize.min(last),
        };
        diseases.get(index).copied().unwrap_or(HEALTHY)
    }
}

/// Classify leaf colour statistics for a host crop.
///
/// Confidence is a heuristic display value drawn from `jitter`, rounded to
/// one decimal; it is not a statistical probability.
pub fn detect_disease(
    stats: &ImageStatistics,
    host: HostCrop,
    jitter: &mut impl JitterSource,
) -> DiseaseDiagnosis {
    let finding = ColourFinding::classify(stats);
    let record = finding.record(catalog(host));
    let (base, span) = finding.confidence_band();
    let confidence = round_to_tenth(jittered(base, span, jitter));

    debug!(
        host = host.as_str(),
        ?finding,
        green = stats.green_ratio(),
        brown = stats.brown_ratio(),
        yellow = stats.yellow_ratio(),
        dark = stats.dark_ratio(),
        disease = record.name,
        confidence,
        "disease classified"
    );

    record.to_diagnosis(confidence)
}

/// Classify a raw RGBA buffer for a host named by the dashboard.
///
/// Unknown host names use the tomato catalog.
pub fn detect_disease_from_rgba(
    rgba: &[u8],
    host_name: &str,
    jitter: &mut impl JitterSource,
) -> Result<DiseaseDiagnosis, AdvisorError> {
    let stats = ImageStatistics::from_rgba(rgba)?;
    Ok(detect_disease(&stats, HostCrop::resolve(host_name), jitter))
}
