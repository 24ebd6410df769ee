use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilType {
    Alluvial,
    Red,
    Laterite,
    Black,
    Clay,
    ClayLoam,
    Loamy,
    SandyLoam,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "Alluvial",
            SoilType::Red => "Red",
            SoilType::Laterite => "Laterite",
            SoilType::Black => "Black",
            SoilType::Clay => "Clay",
            SoilType::ClayLoam => "Clay Loam",
            SoilType::Loamy => "Loamy",
            SoilType::SandyLoam => "Sandy Loam",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for SoilType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One of the five macro-regions the coordinate resolver can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
        }
    }

    /// Full display name used in prediction output, matching the
    /// reference region table keys.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::North => "North India",
            Region::South => "South India",
            Region::East => "East India",
            Region::West => "West India",
            Region::Central => "Central India",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "north india" => Some(Region::North),
            "south" | "south india" => Some(Region::South),
            "east" | "east india" => Some(Region::East),
            "west" | "west india" => Some(Region::West),
            "central" | "central india" => Some(Region::Central),
            _ => None,
        }
    }

    pub const ALL: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

/// Baseline soil and climate profile for one region.
#[derive(Debug, Clone)]
pub struct RegionProfile {
    pub region: Region,
    pub soil_type: SoilType,
    pub ph: f64,
    pub rainfall_mm: f64,
    pub temperature_c: f64,
    /// Crops commonly grown in the region, used to break ties in the
    /// alternative-crop search.
    pub crops: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_type_display_names() {
        assert_eq!(SoilType::Alluvial.as_str(), "Alluvial");
        assert_eq!(SoilType::ClayLoam.as_str(), "Clay Loam");
        assert_eq!(SoilType::SandyLoam.as_str(), "Sandy Loam");
    }

    #[test]
    fn region_from_str_accepts_display_names() {
        assert_eq!(Region::from_str("North"), Some(Region::North));
        assert_eq!(Region::from_str("north india"), Some(Region::North));
        assert_eq!(Region::from_str("Central India"), Some(Region::Central));
        assert_eq!(Region::from_str("midwest"), None);
    }

    #[test]
    fn region_display_name_keeps_reference_keys() {
        for region in Region::ALL {
            assert!(region.display_name().ends_with(" India"));
            assert!(region.display_name().starts_with(region.as_str()));
        }
    }
}
