use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cropcast", version, about = "Crop suitability prediction CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a crop for a location and seeding month
    Predict {
        /// Crop name (free text; unknown crops score against default tolerances)
        #[arg(long)]
        crop: String,

        /// Latitude in decimal degrees (falls back to the configured farm)
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Longitude in decimal degrees (falls back to the configured farm)
        #[arg(long, requires = "lat")]
        lon: Option<f64>,

        /// Seeding month, e.g. "July" (defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        /// Emit the result as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// List the crop catalog and tolerance ranges
    Crops,
    /// List the built-in region profiles
    Regions {
        /// Show a single region, e.g. "North" or "North India"
        name: Option<String>,
    },
    /// Interactive setup of the farm profile
    Init,
}
