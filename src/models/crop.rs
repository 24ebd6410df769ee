use super::region::SoilType;
use super::season::Season;

/// Closed interval of acceptable values for one environmental factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Hand-tuned growing tolerances for one crop.
///
/// Nutrient ranges come from the source dataset but do not feed the
/// success-rate weights; they are informational only. Seasons and soil
/// types are optional: a crop without a list gets partial credit for
/// those factors rather than a hard mismatch.
#[derive(Debug, Clone)]
pub struct CropTolerance {
    pub temperature_c: Range,
    pub rainfall_mm: Range,
    pub humidity_pct: Range,
    pub ph: Range,
    pub nitrogen: Option<Range>,
    pub phosphorus: Option<Range>,
    pub potassium: Option<Range>,
    pub seasons: Option<&'static [Season]>,
    pub soil_types: Option<&'static [SoilType]>,
}

impl CropTolerance {
    pub fn grows_in_season(&self, season: Season) -> bool {
        self.seasons.is_some_and(|s| s.contains(&season))
    }

    pub fn suits_soil(&self, soil: SoilType) -> bool {
        self.soil_types.is_some_and(|s| s.contains(&soil))
    }
}
