mod cli;
mod config;
mod error;
mod logic;
mod models;
mod report;
mod tables;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::CropcastError;
use models::{Location, Month, PredictionRequest};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; -v flags win over RUST_LOG only when it is unset
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Predict {
            crop,
            lat,
            lon,
            month,
            json,
        } => {
            let location = resolve_location(lat, lon, cli.config.clone())?;
            let month = resolve_month(month.as_deref())?;

            let request = PredictionRequest {
                crop_name: crop,
                location,
                month,
            };
            let result = logic::predict(&request);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", report::render_prediction(&result));
            }
        }
        Commands::Crops => {
            print!("{}", report::render_crop_catalog());
        }
        Commands::Regions { name } => match name {
            Some(name) => {
                let region = models::Region::from_str(&name).ok_or_else(|| {
                    CropcastError::InvalidInput(format!("unrecognized region '{}'", name))
                })?;
                print!("{}", report::render_region_profile(region));
            }
            None => print!("{}", report::render_region_profiles()),
        },
        Commands::Init => {
            let (config, path) = Config::setup_interactive()?;
            tracing::info!(farm = %config.farm.name, path = %path.display(), "farm profile saved");
        }
    }

    Ok(())
}

/// Coordinates from flags when given, otherwise from the configured
/// farm profile.
fn resolve_location(
    lat: Option<f64>,
    lon: Option<f64>,
    config_override: Option<std::path::PathBuf>,
) -> anyhow::Result<Location> {
    if let (Some(lat), Some(lon)) = (lat, lon) {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CropcastError::InvalidInput(
                "latitude and longitude must be finite numbers".into(),
            )
            .into());
        }
        return Ok(Location::new(lat, lon));
    }

    let config = Config::load(config_override)
        .context("no --lat/--lon given and no farm profile configured")?;
    tracing::debug!(farm = %config.farm.name, "using configured farm location");
    Ok(Location::new(config.farm.latitude, config.farm.longitude))
}

/// Month from the flag when given, otherwise the current calendar month.
fn resolve_month(month: Option<&str>) -> anyhow::Result<Month> {
    match month {
        Some(name) => Month::from_str(name).ok_or_else(|| {
            let valid: Vec<&str> = Month::ALL.iter().map(|m| m.as_str()).collect();
            CropcastError::InvalidInput(format!(
                "unrecognized month '{}' (expected one of: {})",
                name,
                valid.join(", ")
            ))
            .into()
        }),
        None => Ok(Month::current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_month_parses_names_and_defaults() {
        assert_eq!(resolve_month(Some("July")).unwrap(), Month::July);
        assert_eq!(resolve_month(Some("jan")).unwrap(), Month::January);
        assert!(resolve_month(Some("smarch")).is_err());
        // No flag: current month, whatever it is, must resolve
        assert!(resolve_month(None).is_ok());
    }

    #[test]
    fn explicit_coordinates_skip_config() {
        let location = resolve_location(Some(28.61), Some(77.21), None).unwrap();
        assert_eq!(location.lat, 28.61);
        assert_eq!(location.lon, 77.21);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        assert!(resolve_location(Some(f64::NAN), Some(77.21), None).is_err());
        assert!(resolve_location(Some(28.61), Some(f64::INFINITY), None).is_err());
    }
}
