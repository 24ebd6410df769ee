use chrono::{Datelike, Local};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The four growing seasons used by the regional climate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Summer,
    Monsoon,
    PostMonsoon,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::PostMonsoon => "Post-Monsoon",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "january" | "jan" => Some(Month::January),
            "february" | "feb" => Some(Month::February),
            "march" | "mar" => Some(Month::March),
            "april" | "apr" => Some(Month::April),
            "may" => Some(Month::May),
            "june" | "jun" => Some(Month::June),
            "july" | "jul" => Some(Month::July),
            "august" | "aug" => Some(Month::August),
            "september" | "sep" => Some(Month::September),
            "october" | "oct" => Some(Month::October),
            "november" | "nov" => Some(Month::November),
            "december" | "dec" => Some(Month::December),
            _ => None,
        }
    }

    /// 1-based month number to `Month` (calendar convention, matching chrono).
    pub fn from_number(n: u32) -> Option<Self> {
        Some(match n {
            1 => Month::January,
            2 => Month::February,
            3 => Month::March,
            4 => Month::April,
            5 => Month::May,
            6 => Month::June,
            7 => Month::July,
            8 => Month::August,
            9 => Month::September,
            10 => Month::October,
            11 => Month::November,
            12 => Month::December,
            _ => return None,
        })
    }

    /// Current calendar month from the local clock.
    pub fn current() -> Self {
        // chrono months are always 1-12, so the fallback never fires
        Month::from_number(Local::now().month()).unwrap_or(Month::January)
    }

    /// Total month-to-season mapping for the subcontinental climate
    /// calendar. Every month resolves to exactly one season.
    pub fn season(&self) -> Season {
        match self {
            Month::January | Month::February | Month::December => Season::Winter,
            Month::March | Month::April | Month::May => Season::Summer,
            Month::June | Month::July | Month::August | Month::September => Season::Monsoon,
            Month::October | Month::November => Season::PostMonsoon,
        }
    }

    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error;
        let s = String::deserialize(deserializer)?;
        Month::from_str(&s).ok_or_else(|| D::Error::custom(format!("unrecognized month '{}'", s)))
    }
}

/// Seasonal delta applied on top of a region's baseline conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalShift {
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub humidity_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_from_str_valid() {
        assert_eq!(Month::from_str("July"), Some(Month::July));
        assert_eq!(Month::from_str("july"), Some(Month::July));
        assert_eq!(Month::from_str("jul"), Some(Month::July));
        assert_eq!(Month::from_str("DECEMBER"), Some(Month::December));
    }

    #[test]
    fn month_from_str_invalid() {
        assert_eq!(Month::from_str("smarch"), None);
        assert_eq!(Month::from_str(""), None);
    }

    #[test]
    fn month_from_number_round_trip() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(Month::from_number(i as u32 + 1), Some(*month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn season_mapping_is_total() {
        // Every month resolves; spot-check the season boundaries.
        for month in Month::ALL {
            let _ = month.season();
        }
        assert_eq!(Month::January.season(), Season::Winter);
        assert_eq!(Month::February.season(), Season::Winter);
        assert_eq!(Month::March.season(), Season::Summer);
        assert_eq!(Month::May.season(), Season::Summer);
        assert_eq!(Month::June.season(), Season::Monsoon);
        assert_eq!(Month::September.season(), Season::Monsoon);
        assert_eq!(Month::October.season(), Season::PostMonsoon);
        assert_eq!(Month::November.season(), Season::PostMonsoon);
        assert_eq!(Month::December.season(), Season::Winter);
    }

    #[test]
    fn season_display_names() {
        assert_eq!(Season::Winter.as_str(), "Winter");
        assert_eq!(Season::Summer.as_str(), "Summer");
        assert_eq!(Season::Monsoon.as_str(), "Monsoon");
        assert_eq!(Season::PostMonsoon.as_str(), "Post-Monsoon");
    }

    #[test]
    fn month_serde_round_trip() {
        let json = serde_json::to_string(&Month::July).unwrap();
        assert_eq!(json, "\"July\"");
        let parsed: Month = serde_json::from_str("\"july\"").unwrap();
        assert_eq!(parsed, Month::July);
        assert!(serde_json::from_str::<Month>("\"smarch\"").is_err());
    }
}
