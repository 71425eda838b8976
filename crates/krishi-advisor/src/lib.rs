//! Rule-based advisory engines for the Krishi farm dashboard.
//!
//! Every engine is a synchronous, side-effect-free function from a typed
//! input record to a typed result. There is no model here: each decision is
//! a weighted formula, a lookup table, or an ordered first-match cascade.
//! Inputs are range-checked first and rejected with
//! [`AdvisorError::InvalidInput`] when out of domain.
//!
//! # Modules
//!
//! - [`disease`] -- Colour-ratio disease classifier over [`pixels`]
//!   statistics, with per-host disease catalogs.
//! - [`recommend`] -- Ten-crop additive suitability scoring and ranking.
//! - [`risk`] -- Weighted crop risk index and per-band actions.
//! - [`yield_estimate`] -- Harvest, revenue, cost and profit.
//! - [`irrigation`] -- Water need, moisture bands, stage schedules.
//! - [`soil`] -- Fertility score, corrective advice, organic fertilizers.
//! - [`schemes`] -- Government scheme catalog and eligibility partition.
//! - [`market`] -- Mandi quotes, sell/hold advice, price projection.
//! - [`weather`] -- Weather alerts and crop-specific weather advice.
//! - [`confidence`] -- [`JitterSource`] behind the heuristic confidences.
//! - [`config`] -- `krishi-config.yaml` loading.
//!
//! # Confidence values
//!
//! Disease and risk confidences are a fixed base plus bounded jitter. They
//! are display values, not probabilities. Pass a [`FixedJitter`] or a seeded
//! [`RngJitter`] for reproducible output.
//!
//! [`JitterSource`]: confidence::JitterSource
//! [`FixedJitter`]: confidence::FixedJitter
//! [`RngJitter`]: confidence::RngJitter

pub mod confidence;
pub mod config;
pub mod disease;
pub mod error;
pub mod irrigation;
pub mod market;
pub mod pixels;
pub mod recommend;
pub mod risk;
pub mod schemes;
pub mod soil;
pub mod weather;
pub mod yield_estimate;

pub use confidence::{FixedJitter, JitterSource, RngJitter};
pub use config::{AdvisorConfig, ConfigError};
pub use disease::{detect_disease, detect_disease_from_rgba};
pub use error::AdvisorError;
pub use irrigation::{plan_irrigation, stage_schedule};
pub use market::{forecast_prices, market_advice, market_quotes};
pub use pixels::ImageStatistics;
pub use recommend::{recommend_crop, score_crops};
pub use risk::predict_risk;
pub use schemes::{check_eligibility, scheme_catalog};
pub use soil::{analyze_soil, deficient_nutrients, fertilizer_groups, soil_fertility, soil_improvements};
pub use weather::{crop_weather_advice, weather_alerts};
pub use yield_estimate::estimate_yield;
