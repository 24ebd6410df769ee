//! The suitability scoring engine: a pure, synchronous pipeline from
//! (crop, location, month) to a `PredictionResult`. Every lookup that
//! could miss has a documented fallback, so the whole path is total
//! over its input domain.

use super::alternative::find_alternative;
use crate::models::{Location, PredictionDetails, PredictionRequest, PredictionResult, Region};
use crate::tables;

/// Success rates at or above this are considered suitable (inclusive).
pub const SUITABILITY_THRESHOLD: u8 = 70;

const WEIGHT_TEMPERATURE: f64 = 0.20;
const WEIGHT_RAINFALL: f64 = 0.20;
const WEIGHT_PH: f64 = 0.15;
const WEIGHT_HUMIDITY: f64 = 0.15;
const WEIGHT_SEASON: f64 = 0.15;
const WEIGHT_SOIL: f64 = 0.15;

/// Resolve a coordinate pair to a macro-region.
///
/// The checks run in fixed priority order and the first match wins;
/// this is a deliberate tie-break policy. Latitude 28.0 exactly is not
/// North (strict comparison), and any coordinates failing all four
/// checks land in Central, so the function is total.
pub fn resolve_region(location: &Location) -> Region {
    if location.lat > 28.0 {
        Region::North
    } else if location.lat < 15.0 {
        Region::South
    } else if location.lon > 85.0 {
        Region::East
    } else if location.lon < 75.0 {
        Region::West
    } else {
        Region::Central
    }
}

/// Score how well `actual` fits the closed interval `[min, max]`.
///
/// Inside the interval the score is 100; outside it drops linearly by
/// 10 points per unit of deviation, floored at 0. The constant 10 is
/// part of the published output contract and must not change.
pub fn match_percentage(actual: f64, min: f64, max: f64) -> u8 {
    if actual >= min && actual <= max {
        return 100;
    }
    let deviation = if actual < min {
        min - actual
    } else {
        actual - max
    };
    (100.0 - deviation * 10.0).round().clamp(0.0, 100.0) as u8
}

/// Per-factor match scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorScores {
    pub temperature: u8,
    pub rainfall: u8,
    pub ph: u8,
    pub humidity: u8,
    pub season: u8,
    pub soil: u8,
}

impl FactorScores {
    /// Weighted aggregate success rate. The six weights sum to exactly
    /// 1.00, so the result stays in [0, 100].
    pub fn aggregate(&self) -> u8 {
        (f64::from(self.temperature) * WEIGHT_TEMPERATURE
            + f64::from(self.rainfall) * WEIGHT_RAINFALL
            + f64::from(self.ph) * WEIGHT_PH
            + f64::from(self.humidity) * WEIGHT_HUMIDITY
            + f64::from(self.season) * WEIGHT_SEASON
            + f64::from(self.soil) * WEIGHT_SOIL)
            .round() as u8
    }
}

/// Run the full scoring pipeline for one request.
///
/// Crops without a tolerance entry score against the wide default
/// ranges; an alternative crop is searched only when the aggregate
/// falls below the suitability threshold.
pub fn predict(request: &PredictionRequest) -> PredictionResult {
    let region = resolve_region(&request.location);
    let profile = tables::region_profile(region);

    let season = request.month.season();
    let shift = tables::seasonal_shift(season);

    let adjusted_temperature = profile.temperature_c + shift.temperature_c;
    let adjusted_rainfall = profile.rainfall_mm + shift.rainfall_mm;
    let adjusted_humidity = tables::BASE_HUMIDITY_PCT + shift.humidity_pct;

    let tolerance =
        tables::crop_tolerance(&request.crop_name).unwrap_or(&tables::DEFAULT_TOLERANCE);

    let scores = FactorScores {
        temperature: match_percentage(
            adjusted_temperature,
            tolerance.temperature_c.min,
            tolerance.temperature_c.max,
        ),
        rainfall: match_percentage(
            adjusted_rainfall,
            tolerance.rainfall_mm.min,
            tolerance.rainfall_mm.max,
        ),
        ph: match_percentage(profile.ph, tolerance.ph.min, tolerance.ph.max),
        humidity: match_percentage(
            adjusted_humidity,
            tolerance.humidity_pct.min,
            tolerance.humidity_pct.max,
        ),
        season: if tolerance.grows_in_season(season) {
            100
        } else {
            50
        },
        soil: if tolerance.suits_soil(profile.soil_type) {
            100
        } else {
            60
        },
    };

    let success_rate = scores.aggregate();
    let is_suitable = success_rate >= SUITABILITY_THRESHOLD;

    tracing::debug!(
        crop = %request.crop_name,
        region = %region,
        season = %season,
        ?scores,
        success_rate,
        "scored prediction request"
    );

    let alternative_crop = if is_suitable {
        None
    } else {
        Some(find_alternative(region, request.month, &request.crop_name))
    };

    PredictionResult {
        crop_name: request.crop_name.clone(),
        success_rate,
        is_suitable,
        alternative_crop,
        yield_percentage: (f64::from(success_rate) * 0.9).round().min(100.0) as u8,
        soil_suitability: (f64::from(scores.ph) * 0.6 + f64::from(scores.soil) * 0.4).round()
            as u8,
        climate_compatibility: ((f64::from(scores.temperature)
            + f64::from(scores.rainfall)
            + f64::from(scores.season))
            / 3.0)
            .round() as u8,
        details: PredictionDetails {
            region,
            soil_type: profile.soil_type,
            adjusted_temperature,
            adjusted_rainfall,
            ph: profile.ph,
            season,
        },
    }
}
