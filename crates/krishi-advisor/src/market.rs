//! Mandi price table, sell/hold advice and short-range price projection.

use krishi_types::{
    Crop, MarketAdvice, MarketDemand, MarketQuote, MarketTrend, PriceForecast, PricePoint,
    TradeAction,
};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::confidence::JitterSource;
use crate::error::AdvisorError;

/// Months covered by every price history, oldest first.
pub const HISTORY_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Number of monthly steps in a price forecast.
pub const FORECAST_MONTHS: u32 = 3;

struct QuoteRecord {
    crop: Crop,
    name: &'static str,
    price: u32,
    change: f64,
    trend: MarketTrend,
    msp: u32,
    demand: MarketDemand,
    history: [u32; 6],
}

impl QuoteRecord {
    fn to_quote(&self) -> MarketQuote {
        MarketQuote {
            crop: self.name.to_owned(),
            current_price: Decimal::from(self.price),
            unit: "quintal".to_owned(),
            change: self.change,
            trend: self.trend,
            msp: Decimal::from(self.msp),
            market_demand: self.demand,
            price_history: HISTORY_MONTHS
                .iter()
                .zip(self.history)
                .map(|(month, price)| PricePoint {
                    month: (*month).to_owned(),
                    price: Decimal::from(price),
                })
                .collect(),
        }
    }
}

static QUOTES: [QuoteRecord; 10] = [
    QuoteRecord {
        crop: Crop::Rice,
        name: "Rice",
        price: 2100,
        change: 5.2,
        trend: MarketTrend::Up,
        msp: 2060,
        demand: MarketDemand::High,
        history: [1980, 2020, 2050, 2080, 2100, 2100],
    },
    QuoteRecord {
        crop: Crop::Wheat,
        name: "Wheat",
        price: 2000,
        change: 3.8,
        trend: MarketTrend::Up,
        msp: 2015,
        demand: MarketDemand::High,
        history: [1850, 1900, 1950, 1980, 1990, 2000],
    },
    QuoteRecord {
        crop: Crop::Cotton,
        name: "Cotton",
        price: 5500,
        change: -2.1,
        trend: MarketTrend::Down,
        msp: 5726,
        demand: MarketDemand::Medium,
        history: [5800, 5750, 5700, 5650, 5550, 5500],
    },
    QuoteRecord {
        crop: Crop::Maize,
        name: "Maize",
        price: 1800,
        change: 1.5,
        trend: MarketTrend::Stable,
        msp: 1870,
        demand: MarketDemand::Medium,
        history: [1750, 1760, 1780, 1790, 1795, 1800],
    },
    QuoteRecord {
        crop: Crop::Sugarcane,
        name: "Sugarcane",
        price: 300,
        change: 0.5,
        trend: MarketTrend::Stable,
        msp: 315,
        demand: MarketDemand::High,
        history: [295, 296, 298, 299, 299, 300],
    },
    QuoteRecord {
        crop: Crop::Tomato,
        name: "Tomato",
        price: 1500,
        change: 15.3,
        trend: MarketTrend::Up,
        msp: 0,
        demand: MarketDemand::High,
        history: [800, 900, 1100, 1250, 1400, 1500],
    },
    QuoteRecord {
        crop: Crop::Potato,
        name: "Potato",
        price: 1200,
        change: -8.2,
        trend: MarketTrend::Down,
        msp: 0,
        demand: MarketDemand::Medium,
        history: [1500, 1450, 1350, 1300, 1250, 1200],
    },
    QuoteRecord {
        crop: Crop::Onion,
        name: "Onion",
        price: 1800,
        change: 12.5,
        trend: MarketTrend::Up,
        msp: 0,
        demand: MarketDemand::High,
        history: [1200, 1300, 1450, 1600, 1700, 1800],
    },
    QuoteRecord {
        crop: Crop::Groundnut,
        name: "Groundnut",
        price: 5000,
        change: 2.8,
        trend: MarketTrend::Up,
        msp: 5550,
        demand: MarketDemand::Medium,
        history: [4800, 4850, 4900, 4950, 4980, 5000],
    },
    QuoteRecord {
        crop: Crop::Soybean,
        name: "Soybean",
        price: 3800,
        change: 1.2,
        trend: MarketTrend::Stable,
        msp: 3950,
        demand: MarketDemand::Medium,
        history: [3700, 3720, 3750, 3770, 3790, 3800],
    },
];

/// Current quotes for every catalog crop.
pub fn market_quotes() -> Vec<MarketQuote> {
    QUOTES.iter().map(QuoteRecord::to_quote).collect()
}

/// Current quote for one crop.
pub fn quote_for(crop: Crop) -> Option<MarketQuote> {
    QUOTES
        .iter()
        .find(|record| record.crop == crop)
        .map(QuoteRecord::to_quote)
}

/// Advice for one quote. The first matching rule wins; a quiet market gets
/// none.
fn advise(quote: &MarketQuote) -> Option<(TradeAction, String)> {
    if quote.change > 10.0 {
        Some((
            TradeAction::Sell,
            format!("Strong price increase (+{}%). Good selling opportunity.", quote.change),
        ))
    } else if quote.change < -5.0 {
        Some((
            TradeAction::Hold,
            format!(
                "Price declining (-{}%). Consider holding for better rates.",
                quote.change.abs()
            ),
        ))
    } else if quote.msp > Decimal::ZERO && quote.current_price < quote.msp {
        Some((
            TradeAction::Hold,
            "Current price below MSP. Sell at government procurement centers.".to_owned(),
        ))
    } else if quote.market_demand == MarketDemand::High && quote.trend == MarketTrend::Up {
        Some((
            TradeAction::Sell,
            "High market demand with upward trend. Favorable selling conditions.".to_owned(),
        ))
    } else {
        None
    }
}

/// Sell/hold suggestions for the quotes that warrant one, in quote order.
pub fn market_advice(quotes: &[MarketQuote]) -> Vec<MarketAdvice> {
    quotes
        .iter()
        .filter_map(|quote| {
            advise(quote).map(|(action, reason)| MarketAdvice {
                action,
                crop: quote.crop.clone(),
                reason,
            })
        })
        .collect()
}

/// Monthly growth factor for one forecast step.
fn step_factor(trend: MarketTrend, unit: f64) -> f64 {
    match trend {
        MarketTrend::Up => 1.0 + 0.03f64.mul_add(unit, 0.02),
        MarketTrend::Down => 1.0 - 0.03f64.mul_add(unit, 0.02),
        MarketTrend::Stable => (unit - 0.5).mul_add(0.02, 1.0),
    }
}

/// Project the price three months ahead.
///
/// Each month compounds on the previous unrounded price: rising markets gain
/// 2-5%, falling ones lose 2-5%, stable ones drift within 1%. Confidence
/// shrinks by ten points per month from 75.
pub fn forecast_prices(
    current: Decimal,
    trend: MarketTrend,
    jitter: &mut impl JitterSource,
) -> Result<Vec<PriceForecast>, AdvisorError> {
    let mut price = current;
    let mut forecast = Vec::new();

    for month in 1..=FORECAST_MONTHS {
        let factor = Decimal::from_f64(step_factor(trend, jitter.unit()))
            .ok_or(AdvisorError::NonFiniteValue { context: "price forecast" })?;
        price = price
            .checked_mul(factor)
            .ok_or(AdvisorError::NonFiniteValue { context: "price forecast" })?;
        forecast.push(PriceForecast {
            month: format!("Month {month}"),
            predicted_price: price
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            confidence: 85_u32.saturating_sub(month.saturating_mul(10)),
        });
    }

    debug!(%current, ?trend, months = forecast.len(), "price forecast projected");
    Ok(forecast)
}
