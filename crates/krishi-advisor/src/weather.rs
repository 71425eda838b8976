//! Weather alerts and crop-specific weather advice.
//!
//! Alerts are checked in a fixed order (temperature, rainfall, humidity,
//! wind, dry spell). When none fire, a single favourable-weather alert is
//! returned, so the list is never empty.

use krishi_types::{AlertLevel, Crop, CurrentWeather, WeatherAlert, WeatherSnapshot};
use tracing::debug;

use crate::error::{AdvisorError, validate_input};

/// Forecast days with more rain than this (mm) count towards the rain total.
pub const RAIN_DAY_MM: f64 = 10.0;
/// Forecast rain total (mm) above which the heavy-rain alert fires.
pub const HEAVY_RAIN_TOTAL_MM: f64 = 50.0;
/// Dry forecast days needed for a dry-spell alert.
pub const DRY_SPELL_DAYS: usize = 5;

fn alert(level: AlertLevel, title: &str, message: impl Into<String>, action: &str) -> WeatherAlert {
    WeatherAlert {
        level,
        title: title.to_owned(),
        message: message.into(),
        action: action.to_owned(),
    }
}

/// Actionable alerts for current conditions and the forecast.
pub fn weather_alerts(snapshot: &WeatherSnapshot) -> Result<Vec<WeatherAlert>, AdvisorError> {
    validate_input(snapshot, "WeatherSnapshot")?;

    let current = &snapshot.current;
    let mut alerts = Vec::new();

    if current.temperature > 38.0 {
        alerts.push(alert(
            AlertLevel::Critical,
            "Extreme Heat Warning",
            "Temperature exceeds 38°C. High risk of heat stress to crops.",
            "Increase irrigation frequency, provide shade for sensitive crops, avoid pesticide application during peak heat",
        ));
    } else if current.temperature > 35.0 {
        alerts.push(alert(
            AlertLevel::Warning,
            "High Temperature Alert",
            "Temperature above 35°C. Monitor crops for heat stress.",
            "Ensure adequate soil moisture, irrigate in early morning or evening",
        ));
    }
    if current.temperature < 10.0 {
        alerts.push(alert(
            AlertLevel::Critical,
            "Frost Warning",
            "Temperature below 10°C. Risk of frost damage.",
            "Protect young plants, use frost covers, irrigate before temperature drops",
        ));
    }

    let rain_days: Vec<f64> = snapshot
        .forecast
        .iter()
        .map(|day| day.rainfall)
        .filter(|rain| *rain > RAIN_DAY_MM)
        .collect();
    if !rain_days.is_empty() {
        let total: f64 = rain_days.iter().sum();
        if total > HEAVY_RAIN_TOTAL_MM {
            alerts.push(alert(
                AlertLevel::Warning,
                "Heavy Rainfall Expected",
                format!("Expected {total}mm rainfall in next 7 days. Risk of waterlogging."),
                "Ensure proper drainage, postpone irrigation, apply preventive fungicide before rain",
            ));
        } else {
            alerts.push(alert(
                AlertLevel::Info,
                "Rainfall Expected",
                format!("Expected {total}mm rainfall in coming days."),
                "Skip scheduled irrigation, plan field operations accordingly",
            ));
        }
    }

    if current.humidity > 80.0 {
        alerts.push(alert(
            AlertLevel::Warning,
            "High Humidity Alert",
            "Humidity above 80%. Increased risk of fungal diseases.",
            "Monitor for disease symptoms, ensure good air circulation, consider preventive fungicide",
        ));
    } else if current.humidity < 30.0 {
        alerts.push(alert(
            AlertLevel::Warning,
            "Low Humidity Alert",
            "Humidity below 30%. Increased water stress and evaporation.",
            "Increase irrigation, mulch soil to retain moisture, monitor plant water stress",
        ));
    }

    if current.wind_speed > 40.0 {
        alerts.push(alert(
            AlertLevel::Critical,
            "Strong Wind Warning",
            "Wind speed exceeds 40 km/h. Risk of crop lodging and physical damage.",
            "Provide support to tall crops, avoid spraying operations, secure greenhouse structures",
        ));
    }

    // Rainfall is validated non-negative, so "no rain" is exactly zero.
    let dry_days = snapshot
        .forecast
        .iter()
        .filter(|day| day.rainfall <= 0.0)
        .count();
    if dry_days >= DRY_SPELL_DAYS {
        alerts.push(alert(
            AlertLevel::Info,
            "Dry Spell Ahead",
            format!("{dry_days} consecutive dry days expected."),
            "Plan irrigation schedule, ensure water availability, consider mulching",
        ));
    }

    if alerts.is_empty() {
        alerts.push(alert(
            AlertLevel::Info,
            "Favorable Weather",
            "Weather conditions are favorable for farming operations.",
            "Good time for field activities, planting, and crop care",
        ));
    }

    debug!(
        temperature = current.temperature,
        humidity = current.humidity,
        forecast_days = snapshot.forecast.len(),
        alerts = alerts.len(),
        "weather alerts generated"
    );

    Ok(alerts)
}

/// Optimal `(temperature, humidity)` bands; wheat for unlisted crops.
pub const fn optimal_bands(crop: Option<Crop>) -> ((f64, f64), (f64, f64)) {
    match crop {
        Some(Crop::Rice) => ((20.0, 35.0), (70.0, 90.0)),
        Some(Crop::Cotton) => ((21.0, 35.0), (50.0, 70.0)),
        Some(Crop::Tomato) => ((18.0, 27.0), (60.0, 70.0)),
        Some(Crop::Potato) => ((15.0, 25.0), (70.0, 80.0)),
        _ => ((12.0, 25.0), (50.0, 70.0)),
    }
}

/// One temperature line and one humidity line for a crop under current
/// conditions.
///
/// `crop_name` is echoed back as given; unlisted crops are judged against
/// the wheat bands.
pub fn crop_weather_advice(
    crop_name: &str,
    current: &CurrentWeather,
) -> Result<Vec<String>, AdvisorError> {
    validate_input(current, "CurrentWeather")?;

    let ((temp_low, temp_high), (hum_low, hum_high)) = optimal_bands(Crop::from_name(crop_name));

    let temperature = if current.temperature < temp_low {
        format!(
            "Temperature below optimal range for {crop_name}. Growth may be slower. Consider delaying planting or using row covers."
        )
    } else if current.temperature > temp_high {
        format!(
            "Temperature above optimal range for {crop_name}. Ensure adequate irrigation and monitor for heat stress."
        )
    } else {
        format!("Temperature is optimal for {crop_name} growth.")
    };

    let humidity = if current.humidity < hum_low {
        format!(
            "Humidity is lower than ideal. Increase irrigation frequency and consider misting for {crop_name}."
        )
    } else if current.humidity > hum_high {
        format!(
            "High humidity may promote diseases in {crop_name}. Ensure good air circulation and monitor for fungal issues."
        )
    } else {
        format!("Humidity levels are suitable for {crop_name}.")
    };

    Ok(vec![temperature, humidity])
}
