//! Plain-text rendering of prediction results and reference tables.

use crate::models::{PredictionResult, Region};
use crate::tables;

pub fn render_prediction(result: &PredictionResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Prediction for {}\n", result.crop_name));
    out.push_str(&format!(
        "  Success rate:          {}%  ({})\n",
        result.success_rate,
        if result.is_suitable {
            "suitable"
        } else {
            "not suitable"
        }
    ));
    out.push_str(&format!(
        "  Expected yield:        {}%\n",
        result.yield_percentage
    ));
    out.push_str(&format!(
        "  Soil suitability:      {}%\n",
        result.soil_suitability
    ));
    out.push_str(&format!(
        "  Climate compatibility: {}%\n",
        result.climate_compatibility
    ));

    if let Some(ref alternative) = result.alternative_crop {
        out.push_str(&format!("  Consider instead:      {}\n", alternative));
    }

    let d = &result.details;
    out.push('\n');
    out.push_str("Conditions\n");
    out.push_str(&format!(
        "  Region:      {} ({} soil, pH {})\n",
        d.region.display_name(),
        d.soil_type,
        d.ph
    ));
    out.push_str(&format!("  Season:      {}\n", d.season));
    out.push_str(&format!(
        "  Temperature: {:.1} C (seasonally adjusted)\n",
        d.adjusted_temperature
    ));
    out.push_str(&format!(
        "  Rainfall:    {:.0} mm (seasonally adjusted)\n",
        d.adjusted_rainfall
    ));

    out
}

pub fn render_crop_catalog() -> String {
    let mut out = String::new();
    out.push_str("Crop catalog (tolerance ranges)\n\n");

    for crop in tables::CROP_CATALOG {
        match tables::crop_tolerance(crop) {
            Some(t) => {
                out.push_str(&format!(
                    "  {:<12} temp {} C, rain {} mm, humidity {} %, pH {}\n",
                    crop, t.temperature_c, t.rainfall_mm, t.humidity_pct, t.ph
                ));
                if let Some(seasons) = t.seasons {
                    let names: Vec<&str> = seasons.iter().map(|s| s.as_str()).collect();
                    out.push_str(&format!("  {:<12} seasons: {}\n", "", names.join(", ")));
                }
                if let (Some(n), Some(p), Some(k)) = (t.nitrogen, t.phosphorus, t.potassium) {
                    out.push_str(&format!(
                        "  {:<12} N {} / P {} / K {}\n",
                        "", n, p, k
                    ));
                }
            }
            None => {
                out.push_str(&format!("  {:<12} (scores against default tolerances)\n", crop));
            }
        }
    }

    out
}

pub fn render_region_profile(region: Region) -> String {
    let p = tables::region_profile(region);
    format!(
        "  {:<14} {} soil, pH {}, {:.0} mm rain, {:.0} C\n  {:<14} grows: {}\n",
        region.display_name(),
        p.soil_type,
        p.ph,
        p.rainfall_mm,
        p.temperature_c,
        "",
        p.crops.join(", ")
    )
}

pub fn render_region_profiles() -> String {
    let mut out = String::new();
    out.push_str("Region profiles\n\n");

    for region in Region::ALL {
        out.push_str(&render_region_profile(region));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::predict;
    use crate::models::{Location, Month, PredictionRequest};

    #[test]
    fn prediction_report_shows_core_numbers() {
        let result = predict(&PredictionRequest {
            crop_name: "rice".into(),
            location: Location::new(28.61, 77.21),
            month: Month::July,
        });
        let report = render_prediction(&result);
        assert!(report.contains("Prediction for rice"));
        assert!(report.contains("85%"));
        assert!(report.contains("suitable"));
        assert!(report.contains("North India"));
        assert!(report.contains("Monsoon"));
    }

    #[test]
    fn unsuitable_report_names_the_alternative() {
        let result = predict(&PredictionRequest {
            crop_name: "wheat".into(),
            location: Location::new(28.61, 77.21),
            month: Month::July,
        });
        let report = render_prediction(&result);
        assert!(report.contains("not suitable"));
        assert!(report.contains("Consider instead:      Rice"));
    }

    #[test]
    fn catalog_listing_covers_every_crop() {
        let listing = render_crop_catalog();
        for crop in tables::CROP_CATALOG {
            assert!(listing.contains(crop), "missing {}", crop);
        }
        // Crops without tolerance entries are flagged as defaults
        assert!(listing.contains("default tolerances"));
    }

    #[test]
    fn region_listing_covers_every_region() {
        let listing = render_region_profiles();
        for region in Region::ALL {
            assert!(listing.contains(region.display_name()));
        }
    }
}
