//! Command handlers.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use image::imageops::FilterType;
use krishi_advisor::pixels::SAMPLE_SIDE;
use krishi_advisor::market::quote_for;
use krishi_advisor::{AdvisorConfig, JitterSource, RngJitter};
use krishi_history::{DetectionRecord, FileHistoryStore, HistoryLog};
use krishi_types::{
    Crop, CropProfile, FarmerProfile, IrrigationParameters, RiskFactors, SoilParameters,
    WeatherSnapshot, YieldParameters,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::info;

use crate::cli::{Cli, Command, MarketCommand};

/// Run the parsed command against a loaded configuration.
pub fn execute(cli: &Cli, config: &AdvisorConfig) -> Result<()> {
    let mut jitter = RngJitter::from_seed_option(config.confidence.seed);

    match &cli.command {
        Command::Disease {
            image,
            crop,
            no_history,
        } => {
            let record = detect(image, crop, &mut jitter)?;
            if config.history.enabled && !no_history {
                let store = FileHistoryStore::new(
                    &config.history.path,
                    config.history.disease_capacity,
                )?;
                store.append(record.clone())?;
            }
            emit(&record.diagnosis, cli.pretty)
        }

        Command::Recommend { input } => {
            let profile: CropProfile = read_input(input.as_deref())?;
            emit(&krishi_advisor::recommend_crop(&profile)?, cli.pretty)
        }

        Command::Risk { input } => {
            let factors: RiskFactors = read_input(input.as_deref())?;
            emit(&krishi_advisor::predict_risk(&factors, &mut jitter)?, cli.pretty)
        }

        Command::Yield { input } => {
            let params: YieldParameters = read_input(input.as_deref())?;
            emit(&krishi_advisor::estimate_yield(&params)?, cli.pretty)
        }

        Command::Irrigation { input, schedule } => {
            let params: IrrigationParameters = read_input(input.as_deref())?;
            let plan = krishi_advisor::plan_irrigation(&params)?;
            if *schedule {
                let stage =
                    krishi_advisor::stage_schedule(Crop::from_name(&params.crop), params.crop_stage);
                emit(&json!({ "plan": plan, "schedule": stage }), cli.pretty)
            } else {
                emit(&plan, cli.pretty)
            }
        }

        Command::Soil { input } => {
            let params: SoilParameters = read_input(input.as_deref())?;
            emit(&krishi_advisor::analyze_soil(&params)?, cli.pretty)
        }

        Command::Schemes { input } => {
            let profile: FarmerProfile = read_input(input.as_deref())?;
            emit(&krishi_advisor::check_eligibility(&profile)?, cli.pretty)
        }

        Command::Market { action } => market(action, &mut jitter, cli.pretty),

        Command::Weather { input, crop } => {
            let snapshot: WeatherSnapshot = read_input(input.as_deref())?;
            let alerts = krishi_advisor::weather_alerts(&snapshot)?;
            match crop {
                Some(crop) => {
                    let advice = krishi_advisor::crop_weather_advice(crop, &snapshot.current)?;
                    emit(&json!({ "alerts": alerts, "advice": advice }), cli.pretty)
                }
                None => emit(&alerts, cli.pretty),
            }
        }

        Command::History { limit, clear } => history(config, *limit, *clear, cli.pretty),
    }
}

/// Decode a photo, downsample it and classify it.
fn detect(path: &Path, crop: &str, jitter: &mut impl JitterSource) -> Result<DetectionRecord> {
    let photo = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?;
    let rgba = photo
        .resize_exact(SAMPLE_SIDE, SAMPLE_SIDE, FilterType::Triangle)
        .to_rgba8();
    let diagnosis = krishi_advisor::detect_disease_from_rgba(rgba.as_raw(), crop, jitter)?;

    info!(
        image = %path.display(),
        crop,
        disease = %diagnosis.disease,
        confidence = diagnosis.confidence,
        "leaf photo diagnosed"
    );

    Ok(DetectionRecord {
        crop: crop.to_owned(),
        image: path.display().to_string(),
        diagnosis,
    })
}

fn market(action: &MarketCommand, jitter: &mut impl JitterSource, pretty: bool) -> Result<()> {
    match action {
        MarketCommand::Quotes => emit(&krishi_advisor::market_quotes(), pretty),
        MarketCommand::Advice => {
            emit(&krishi_advisor::market_advice(&krishi_advisor::market_quotes()), pretty)
        }
        MarketCommand::Forecast { crop, price } => {
            let Some(quote) = Crop::from_name(crop).and_then(quote_for) else {
                bail!("no market quote for crop {crop:?}");
            };
            let start = price.unwrap_or(quote.current_price);
            if start <= Decimal::ZERO {
                bail!("starting price must be positive, got {start}");
            }
            emit(&krishi_advisor::forecast_prices(start, quote.trend, jitter)?, pretty)
        }
    }
}

fn history(config: &AdvisorConfig, limit: Option<usize>, clear: bool, pretty: bool) -> Result<()> {
    let store = FileHistoryStore::new(&config.history.path, config.history.disease_capacity)?;
    if clear {
        store.clear()?;
        info!(path = %store.path().display(), "history cleared");
        return Ok(());
    }
    let log: HistoryLog<DetectionRecord> = store.load()?;
    let shown: Vec<_> = log.entries().iter().take(limit.unwrap_or(usize::MAX)).collect();
    emit(&shown, pretty)
}

/// Deserialize an engine input from a file, or from stdin for `None`/`-`.
fn read_input<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    match path.filter(|p| *p != Path::new("-")) {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("{} is not a valid input document", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            serde_json::from_str(&text).context("stdin is not a valid input document")
        }
    }
}

/// Write a result to stdout as JSON.
fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Load the configuration, falling back to defaults when the file is absent.
///
/// Runs before logging is initialized, so it does not log.
pub fn load_config(path: &Path) -> Result<AdvisorConfig> {
    if path.exists() {
        AdvisorConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))
    } else {
        Ok(AdvisorConfig::default())
    }
}
