//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use krishi_advisor::config::DEFAULT_CONFIG_FILE;
use rust_decimal::Decimal;

/// Farm advisory engines on the command line.
///
/// Engine inputs are JSON documents in the dashboard's field names, read
/// from a file or from stdin when no file (or `-`) is given. Results are
/// written to stdout as JSON; logs go to stderr.
#[derive(Debug, Parser)]
#[command(name = "krishi")]
#[command(version)]
#[command(about = "Rule-based crop, soil, irrigation and market advice")]
#[command(long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file. Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long, short = 'p', global = true)]
    pub pretty: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Diagnose a leaf photo.
    Disease {
        /// Path to the photo (any format the `image` crate decodes).
        image: PathBuf,

        /// Host crop (tomato, potato, wheat, rice, corn). Unknown names use
        /// the tomato catalog.
        #[arg(long, default_value = "tomato")]
        crop: String,

        /// Do not record the detection in the history file.
        #[arg(long)]
        no_history: bool,
    },

    /// Rank the ten catalog crops for a soil and climate profile.
    Recommend {
        /// JSON `CropProfile` file; stdin when omitted.
        input: Option<PathBuf>,
    },

    /// Score crop risk from field factors.
    Risk {
        /// JSON `RiskFactors` file; stdin when omitted.
        input: Option<PathBuf>,
    },

    /// Estimate harvest and profit.
    Yield {
        /// JSON `YieldParameters` file; stdin when omitted.
        input: Option<PathBuf>,
    },

    /// Plan irrigation for a field.
    Irrigation {
        /// JSON `IrrigationParameters` file; stdin when omitted.
        input: Option<PathBuf>,

        /// Also print the watering schedule for the crop's stage.
        #[arg(long)]
        schedule: bool,
    },

    /// Grade soil fertility and suggest organic fertilizers.
    Soil {
        /// JSON `SoilParameters` file; stdin when omitted.
        input: Option<PathBuf>,
    },

    /// Check government scheme eligibility.
    Schemes {
        /// JSON `FarmerProfile` file; stdin when omitted.
        input: Option<PathBuf>,
    },

    /// Mandi prices, sell/hold advice and price projection.
    Market {
        /// Market action.
        #[command(subcommand)]
        action: MarketCommand,
    },

    /// Weather alerts, optionally with crop-specific advice.
    Weather {
        /// JSON `WeatherSnapshot` file; stdin when omitted.
        input: Option<PathBuf>,

        /// Crop to judge current conditions against.
        #[arg(long)]
        crop: Option<String>,
    },

    /// Show or clear the disease detection history.
    History {
        /// Show at most this many entries.
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Remove every entry.
        #[arg(long)]
        clear: bool,
    },
}

/// Market subcommands.
#[derive(Debug, Subcommand)]
pub enum MarketCommand {
    /// Current quotes for every catalog crop.
    Quotes,

    /// Sell/hold advice over the current quotes.
    Advice,

    /// Three-month price projection for one crop.
    Forecast {
        /// Catalog crop name.
        crop: String,

        /// Starting price in rupees per quintal; the current quote when
        /// omitted.
        #[arg(long)]
        price: Option<Decimal>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_disease_with_defaults() {
        let cli = Cli::try_parse_from(["krishi", "disease", "leaf.jpg"])
            .unwrap_or_else(|e| panic!("valid args: {e}"));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(matches!(
            cli.command,
            Command::Disease { ref crop, no_history: false, .. } if crop == "tomato"
        ));
    }

    #[test]
    fn parses_market_forecast_price() {
        let cli = Cli::try_parse_from(["krishi", "market", "forecast", "rice", "--price", "2150.5"])
            .unwrap_or_else(|e| panic!("valid args: {e}"));
        let Command::Market {
            action: MarketCommand::Forecast { crop, price },
        } = cli.command
        else {
            panic!("expected market forecast");
        };
        assert_eq!(crop, "rice");
        assert_eq!(price, Some(Decimal::new(21505, 1)));
    }
}
