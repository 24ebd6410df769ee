//! Static agronomic reference data: region baselines, seasonal shifts,
//! and per-crop tolerance ranges. Ported verbatim from the source
//! dataset; values are hand-tuned and preserved for output
//! compatibility, not re-derived.

use crate::models::{CropTolerance, Range, Region, RegionProfile, Season, SeasonalShift, SoilType};

/// Baseline ambient humidity before the seasonal shift is applied.
pub const BASE_HUMIDITY_PCT: f64 = 70.0;

/// Crop returned by the alternative search when no season-compatible
/// candidate exists.
pub const FALLBACK_CROP: &str = "Wheat";

/// Every crop offered for selection, in fixed iteration order. The
/// order breaks ties in the alternative-crop search, so it must not be
/// re-sorted.
pub const CROP_CATALOG: [&str; 12] = [
    "rice",
    "maize",
    "wheat",
    "cotton",
    "sugarcane",
    "groundnut",
    "jute",
    "coffee",
    "tea",
    "pulses",
    "soybeans",
    "barley",
];

static NORTH: RegionProfile = RegionProfile {
    region: Region::North,
    soil_type: SoilType::Alluvial,
    ph: 6.8,
    rainfall_mm: 180.0,
    temperature_c: 22.0,
    crops: &["wheat", "rice", "sugarcane", "cotton"],
};

static SOUTH: RegionProfile = RegionProfile {
    region: Region::South,
    soil_type: SoilType::Red,
    ph: 5.9,
    rainfall_mm: 250.0,
    temperature_c: 28.0,
    crops: &["rice", "coconut", "coffee", "spices"],
};

static EAST: RegionProfile = RegionProfile {
    region: Region::East,
    soil_type: SoilType::Laterite,
    ph: 6.2,
    rainfall_mm: 300.0,
    temperature_c: 25.0,
    crops: &["rice", "jute", "tea", "maize"],
};

static WEST: RegionProfile = RegionProfile {
    region: Region::West,
    soil_type: SoilType::Black,
    ph: 7.1,
    rainfall_mm: 120.0,
    temperature_c: 24.0,
    crops: &["cotton", "groundnut", "sugarcane", "jowar"],
};

static CENTRAL: RegionProfile = RegionProfile {
    region: Region::Central,
    soil_type: SoilType::Black,
    ph: 7.5,
    rainfall_mm: 150.0,
    temperature_c: 26.0,
    crops: &["soybean", "wheat", "cotton", "pulses"],
};

/// Baseline profile for a region. Total over the `Region` enum.
pub fn region_profile(region: Region) -> &'static RegionProfile {
    match region {
        Region::North => &NORTH,
        Region::South => &SOUTH,
        Region::East => &EAST,
        Region::West => &WEST,
        Region::Central => &CENTRAL,
    }
}

/// Seasonal delta applied to a region's baseline conditions. Total
/// over the `Season` enum, so the zero-shift fallback of the scoring
/// contract can never actually fire.
pub fn seasonal_shift(season: Season) -> SeasonalShift {
    match season {
        Season::Winter => SeasonalShift {
            temperature_c: -5.0,
            rainfall_mm: -30.0,
            humidity_pct: -10.0,
        },
        Season::Summer => SeasonalShift {
            temperature_c: 8.0,
            rainfall_mm: -15.0,
            humidity_pct: -20.0,
        },
        Season::Monsoon => SeasonalShift {
            temperature_c: 2.0,
            rainfall_mm: 70.0,
            humidity_pct: 30.0,
        },
        Season::PostMonsoon => SeasonalShift {
            temperature_c: 4.0,
            rainfall_mm: 10.0,
            humidity_pct: 15.0,
        },
    }
}

/// Wide-open tolerance used for crops without a dedicated entry.
pub static DEFAULT_TOLERANCE: CropTolerance = CropTolerance {
    temperature_c: Range::new(18.0, 30.0),
    rainfall_mm: Range::new(60.0, 300.0),
    humidity_pct: Range::new(55.0, 90.0),
    ph: Range::new(5.5, 7.5),
    nitrogen: None,
    phosphorus: None,
    potassium: None,
    seasons: None,
    soil_types: None,
};

static RICE: CropTolerance = CropTolerance {
    temperature_c: Range::new(20.0, 27.0),
    rainfall_mm: Range::new(150.0, 300.0),
    humidity_pct: Range::new(80.0, 90.0),
    ph: Range::new(5.5, 7.5),
    nitrogen: Some(Range::new(70.0, 100.0)),
    phosphorus: Some(Range::new(35.0, 60.0)),
    potassium: Some(Range::new(35.0, 45.0)),
    seasons: Some(&[Season::Monsoon, Season::Summer]),
    soil_types: Some(&[SoilType::Alluvial, SoilType::Clay, SoilType::ClayLoam]),
};

static MAIZE: CropTolerance = CropTolerance {
    temperature_c: Range::new(18.0, 27.0),
    rainfall_mm: Range::new(60.0, 110.0),
    humidity_pct: Range::new(55.0, 75.0),
    ph: Range::new(5.5, 7.0),
    nitrogen: None,
    phosphorus: None,
    potassium: None,
    seasons: Some(&[Season::Monsoon, Season::Summer]),
    soil_types: Some(&[SoilType::Loamy, SoilType::SandyLoam]),
};

static WHEAT: CropTolerance = CropTolerance {
    temperature_c: Range::new(15.0, 24.0),
    rainfall_mm: Range::new(75.0, 150.0),
    humidity_pct: Range::new(60.0, 80.0),
    ph: Range::new(6.0, 7.5),
    nitrogen: None,
    phosphorus: None,
    potassium: None,
    seasons: Some(&[Season::Winter, Season::PostMonsoon]),
    soil_types: Some(&[SoilType::Loamy, SoilType::ClayLoam]),
};

static COTTON: CropTolerance = CropTolerance {
    temperature_c: Range::new(21.0, 30.0),
    rainfall_mm: Range::new(60.0, 110.0),
    humidity_pct: Range::new(50.0, 70.0),
    ph: Range::new(5.8, 8.0),
    nitrogen: None,
    phosphorus: None,
    potassium: None,
    seasons: Some(&[Season::Monsoon]),
    soil_types: Some(&[SoilType::Black, SoilType::Alluvial]),
};

static SUGARCANE: CropTolerance = CropTolerance {
    temperature_c: Range::new(20.0, 35.0),
    rainfall_mm: Range::new(100.0, 175.0),
    humidity_pct: Range::new(70.0, 85.0),
    ph: Range::new(6.0, 8.0),
    nitrogen: None,
    phosphorus: None,
    potassium: None,
    seasons: Some(&[Season::Summer]),
    soil_types: Some(&[SoilType::Loamy, SoilType::ClayLoam]),
};

static GROUNDNUT: CropTolerance = CropTolerance {
    temperature_c: Range::new(20.0, 30.0),
    rainfall_mm: Range::new(50.0, 125.0),
    humidity_pct: Range::new(60.0, 75.0),
    ph: Range::new(5.5, 7.0),
    nitrogen: None,
    phosphorus: None,
    potassium: None,
    seasons: Some(&[Season::Summer, Season::Monsoon]),
    soil_types: Some(&[SoilType::SandyLoam, SoilType::Loamy]),
};

static JUTE: CropTolerance = CropTolerance {
    temperature_c: Range::new(24.0, 35.0),
    rainfall_mm: Range::new(150.0, 250.0),
    humidity_pct: Range::new(80.0, 90.0),
    ph: Range::new(6.0, 7.5),
    nitrogen: None,
    phosphorus: None,
    potassium: None,
    seasons: Some(&[Season::Monsoon]),
    soil_types: Some(&[SoilType::Alluvial, SoilType::ClayLoam]),
};

/// Tolerance entry for a crop, looked up case-insensitively. Coverage
/// is partial: catalog crops without an entry score against
/// [`DEFAULT_TOLERANCE`].
pub fn crop_tolerance(name: &str) -> Option<&'static CropTolerance> {
    match name.to_lowercase().as_str() {
        "rice" => Some(&RICE),
        "maize" => Some(&MAIZE),
        "wheat" => Some(&WHEAT),
        "cotton" => Some(&COTTON),
        "sugarcane" => Some(&SUGARCANE),
        "groundnut" => Some(&GROUNDNUT),
        "jute" => Some(&JUTE),
        _ => None,
    }
}
