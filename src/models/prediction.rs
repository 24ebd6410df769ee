use super::region::{Region, SoilType};
use super::season::{Month, Season};
use serde::{Deserialize, Serialize};

/// Geographic point in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One scoring request: the crop to assess, where, and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub crop_name: String,
    pub location: Location,
    pub month: Month,
}

/// Environmental context the score was derived from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDetails {
    pub region: Region,
    pub soil_type: SoilType,
    pub adjusted_temperature: f64,
    pub adjusted_rainfall: f64,
    pub ph: f64,
    pub season: Season,
}

/// Outcome of one scoring run. Transient: produced by the engine,
/// rendered by the caller, never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub crop_name: String,
    pub success_rate: u8,
    pub is_suitable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_crop: Option<String>,
    pub yield_percentage: u8,
    pub soil_suitability: u8,
    pub climate_compatibility: u8,
    pub details: PredictionDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_from_wire_shape() {
        let json = r#"{
            "cropName": "rice",
            "location": { "lat": 28.61, "lon": 77.21 },
            "month": "July"
        }"#;
        let request: PredictionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.crop_name, "rice");
        assert_eq!(request.location.lat, 28.61);
        assert_eq!(request.month, Month::July);
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = PredictionResult {
            crop_name: "rice".into(),
            success_rate: 85,
            is_suitable: true,
            alternative_crop: None,
            yield_percentage: 77,
            soil_suitability: 100,
            climate_compatibility: 100,
            details: PredictionDetails {
                region: Region::North,
                soil_type: SoilType::Alluvial,
                adjusted_temperature: 24.0,
                adjusted_rainfall: 250.0,
                ph: 6.8,
                season: Season::Monsoon,
            },
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["successRate"], 85);
        assert_eq!(json["isSuitable"], true);
        assert_eq!(json["details"]["region"], "North India");
        assert_eq!(json["details"]["soilType"], "Alluvial");
        assert_eq!(json["details"]["season"], "Monsoon");
        // Absent alternative is omitted, not null
        assert!(json.get("alternativeCrop").is_none());
    }
}
