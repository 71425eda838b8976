//! End-to-end scenarios and properties for the advisory engines.
//!
//! Properties are checked over inputs drawn from a seeded RNG, so failures
//! reproduce exactly.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

use krishi_advisor::disease::ColourFinding;
use krishi_advisor::irrigation::base_water_need;
use krishi_advisor::soil::ph_score;
use krishi_advisor::yield_estimate::base_yield;
use krishi_advisor::{
    AdvisorError, FixedJitter, ImageStatistics, RngJitter, analyze_soil, check_eligibility,
    crop_weather_advice, detect_disease, estimate_yield, plan_irrigation, predict_risk,
    recommend_crop, scheme_catalog, score_crops, soil_fertility, weather_alerts,
};
use krishi_types::{
    Crop, CropProfile, CropStage, CurrentWeather, FarmerProfile, FertilityGrade, ForecastDay,
    HostCrop, IrrigationParameters, RiskFactors, RiskLevel, SoilParameters, WeatherSnapshot,
    YieldParameters,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CASES: usize = 200;

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn green_leaf_is_healthy_for_any_host() {
    // 60% green pixels.
    let stats = ImageStatistics::from_counts(224 * 224, 0, 0, 0, 30_106).unwrap();
    assert!(stats.green_ratio() > 0.5);
    let mut jitter = RngJitter::seeded(2024);
    for host in HostCrop::ALL {
        let diagnosis = detect_disease(&stats, host, &mut jitter);
        assert_eq!(diagnosis.disease, "Healthy");
        assert!((92.0..=97.0).contains(&diagnosis.confidence));
    }
}

#[test]
fn documented_risk_scenario() {
    let factors = RiskFactors {
        soil_health: 75.0,
        weather_risk: 30.0,
        pest_incidence: 20.0,
        irrigation_quality: 80.0,
        crop_age: 45,
    };
    let result = predict_risk(&factors, &mut FixedJitter::zero()).unwrap();
    assert_eq!(result.risk_score, 23);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(
        result.recommendations,
        [
            "Continue current practices",
            "Monitor crop health regularly",
            "Maintain soil nutrition levels"
        ]
    );
}

#[test]
fn documented_soil_scenario() {
    let params = SoilParameters {
        nitrogen: 70.0,
        phosphorus: 45.0,
        potassium: 50.0,
        ph: 6.5,
        organic_matter: 3.5,
        moisture: 50.0,
    };
    let result = soil_fertility(&params).unwrap();
    assert_eq!(result.score, 59);
    assert_eq!(result.grade, FertilityGrade::Fair);

    let report = analyze_soil(&params).unwrap();
    assert!(report.deficiencies.is_empty());
    assert_eq!(report.fertilizers.len(), 1);
}

#[test]
fn ph_band_edges() {
    assert_eq!(ph_score(6.5), 100.0);
    assert_eq!(ph_score(5.5), 75.0);
}

#[test]
fn json_round_trip_through_the_engine() {
    let profile: CropProfile = serde_json::from_str(
        r#"{"N":90,"P":42,"K":43,"temperature":25,"humidity":82,"ph":6.5,"rainfall":200}"#,
    )
    .unwrap();
    let result = recommend_crop(&profile).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["recommendedCrop"], "rice");
    assert_eq!(json["alternatives"].as_array().map(Vec::len), Some(3));
}

// =============================================================================
// Properties
// =============================================================================

fn random_profile(rng: &mut StdRng) -> CropProfile {
    CropProfile {
        nitrogen: rng.random_range(0.0..200.0),
        phosphorus: rng.random_range(0.0..150.0),
        potassium: rng.random_range(0.0..150.0),
        temperature: rng.random_range(5.0..45.0),
        humidity: rng.random_range(10.0..100.0),
        ph: rng.random_range(4.0..9.0),
        rainfall: rng.random_range(0.0..300.0),
    }
}

#[test]
fn crop_scores_are_bounded_and_confidence_capped() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..CASES {
        let profile = random_profile(&mut rng);
        let ranked = score_crops(&profile);
        for entry in ranked {
            assert!(entry.score <= 100);
            assert_eq!(entry.confidence, entry.score.min(98));
        }
        let result = recommend_crop(&profile).unwrap();
        assert_eq!(result.recommended_crop, ranked[0].crop);
        assert_eq!(result.alternatives, ranked[1..4]);
    }
}

#[test]
fn zero_quality_yield_is_half_the_base() {
    let mut rng = StdRng::seed_from_u64(2);
    for crop in Crop::ALL {
        let land_area: f64 = rng.random_range(0.1..20.0);
        let params = YieldParameters {
            crop: crop.as_str().to_owned(),
            land_area,
            soil_quality: 0.0,
            irrigation_score: 0.0,
            fertilization_score: 0.0,
            weather_score: 0.0,
        };
        let result = estimate_yield(&params).unwrap();
        let expected = base_yield(Some(crop)) * land_area * 0.5;
        assert!(
            (result.estimated_yield - expected).abs() <= 0.05 + 1e-9,
            "{crop}: {} vs {expected}",
            result.estimated_yield
        );
    }
}

#[test]
fn rain_always_overrides_irrigation() {
    let mut rng = StdRng::seed_from_u64(3);
    let stages = [
        CropStage::Germination,
        CropStage::Vegetative,
        CropStage::Flowering,
        CropStage::Maturity,
    ];
    for i in 0..CASES {
        let crop = Crop::ALL[i % Crop::ALL.len()];
        let params = IrrigationParameters {
            crop: crop.as_str().to_owned(),
            soil_moisture: rng.random_range(0.0..100.0),
            temperature: rng.random_range(5.0..45.0),
            humidity: rng.random_range(10.0..100.0),
            rainfall: rng.random_range(10.01..80.0),
            crop_stage: stages[i % stages.len()],
            soil_type: "clay".to_owned(),
        };
        let plan = plan_irrigation(&params).unwrap();
        assert!(!plan.irrigation_required);
        assert_eq!(plan.water_amount, 0.0);
    }
    assert!(base_water_need(Some(Crop::Rice)) > 0.0);
}

#[test]
fn eligibility_partitions_the_catalog() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..CASES {
        let profile = FarmerProfile {
            land_size: rng.random_range(0.0..80.0),
            land_ownership: rng.random_bool(0.7),
            age: rng.random_bool(0.5).then(|| rng.random_range(16..70)),
            organic_farming: rng.random_bool(0.3),
            loan_taken: rng.random_bool(0.4),
        };
        let report = check_eligibility(&profile).unwrap();
        assert_eq!(
            report.eligible.len() + report.ineligible.len(),
            scheme_catalog().len()
        );
        for scheme in scheme_catalog() {
            let in_eligible = report.eligible.iter().any(|s| s.id == scheme.id);
            let in_ineligible = report.ineligible.iter().any(|s| s.id == scheme.id);
            assert!(in_eligible ^ in_ineligible, "{}", scheme.id);
        }
        assert!(report.ineligible.iter().all(|s| !s.reason.is_empty()));
    }
}

#[test]
fn only_green_leaves_are_reported_healthy() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..CASES {
        let total = 100;
        let stats = ImageStatistics::from_counts(
            total,
            rng.random_range(0..=total),
            rng.random_range(0..=total),
            rng.random_range(0..=total),
            rng.random_range(0..=50),
        )
        .unwrap();
        let finding = ColourFinding::classify(&stats);
        for host in HostCrop::ALL {
            let diagnosis = detect_disease(&stats, host, &mut FixedJitter::zero());
            assert_eq!(diagnosis.disease == "Healthy", finding == ColourFinding::Healthy);
        }
    }
}

// =============================================================================
// Input validation
// =============================================================================

#[test]
fn out_of_domain_inputs_are_typed_errors() {
    let factors = RiskFactors {
        soil_health: 50.0,
        weather_risk: 150.0,
        pest_incidence: 20.0,
        irrigation_quality: 80.0,
        crop_age: 45,
    };
    let err = predict_risk(&factors, &mut FixedJitter::zero()).unwrap_err();
    assert!(matches!(err, AdvisorError::InvalidInput { record: "RiskFactors", .. }));
    assert!(err.to_string().starts_with("invalid RiskFactors"));
}

fn is_invalid<T>(result: &Result<T, AdvisorError>, name: &str) -> bool {
    matches!(result, Err(AdvisorError::InvalidInput { record, .. }) if *record == name)
}

#[test]
fn nan_and_infinity_are_rejected_by_every_engine() {
    let profile = CropProfile {
        nitrogen: f64::NAN,
        phosphorus: 50.0,
        potassium: 50.0,
        temperature: 25.0,
        humidity: 70.0,
        ph: 6.5,
        rainfall: 100.0,
    };
    assert!(is_invalid(&recommend_crop(&profile), "CropProfile"));

    let factors = RiskFactors {
        soil_health: f64::NAN,
        weather_risk: 30.0,
        pest_incidence: 20.0,
        irrigation_quality: 80.0,
        crop_age: 45,
    };
    assert!(is_invalid(
        &predict_risk(&factors, &mut FixedJitter::zero()),
        "RiskFactors"
    ));

    let params = YieldParameters {
        crop: "wheat".to_owned(),
        land_area: f64::INFINITY,
        soil_quality: 80.0,
        irrigation_score: 80.0,
        fertilization_score: 80.0,
        weather_score: 80.0,
    };
    assert!(is_invalid(&estimate_yield(&params), "YieldParameters"));

    let params = IrrigationParameters {
        crop: "rice".to_owned(),
        soil_moisture: f64::NAN,
        temperature: 30.0,
        humidity: 60.0,
        rainfall: 0.0,
        crop_stage: CropStage::Vegetative,
        soil_type: "loamy".to_owned(),
    };
    assert!(is_invalid(&plan_irrigation(&params), "IrrigationParameters"));

    let soil = SoilParameters {
        nitrogen: f64::NAN,
        phosphorus: 30.0,
        potassium: 200.0,
        ph: 6.5,
        organic_matter: 2.0,
        moisture: 40.0,
    };
    assert!(is_invalid(&analyze_soil(&soil), "SoilParameters"));
    assert!(is_invalid(&soil_fertility(&soil), "SoilParameters"));

    let farmer = FarmerProfile {
        land_size: f64::NAN,
        land_ownership: true,
        age: Some(40),
        organic_farming: false,
        loan_taken: false,
    };
    assert!(is_invalid(&check_eligibility(&farmer), "FarmerProfile"));

    let current = CurrentWeather {
        temperature: 28.0,
        humidity: 65.0,
        rainfall: 0.0,
        wind_speed: 12.0,
        pressure: f64::NAN,
        condition: "Partly Cloudy".to_owned(),
    };
    assert!(is_invalid(&crop_weather_advice("rice", &current), "CurrentWeather"));

    let snapshot = WeatherSnapshot {
        current: CurrentWeather {
            pressure: 1013.0,
            ..current
        },
        forecast: vec![ForecastDay {
            day: "Tomorrow".to_owned(),
            temperature: f64::NAN,
            condition: "Rainy".to_owned(),
            rainfall: 20.0,
        }],
    };
    assert!(is_invalid(&weather_alerts(&snapshot), "WeatherSnapshot"));
}
