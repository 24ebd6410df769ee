//! Alternative-crop search, run when the requested crop scores below
//! the suitability threshold.

use crate::models::{Month, Region};
use crate::tables;

/// Find a replacement crop for the resolved region and month.
///
/// Candidates are taken from the catalog in its fixed order, skipping
/// the excluded crop (case-insensitively) and any crop whose tolerance
/// entry does not list the resolved season. Crops without a tolerance
/// entry never qualify. A candidate also grown in the region wins;
/// otherwise the first candidate does. With no candidates at all the
/// fixed fallback crop is returned.
///
/// The result is capitalized for display.
pub fn find_alternative(region: Region, month: Month, exclude: &str) -> String {
    let season = month.season();
    let exclude = exclude.to_lowercase();

    let candidates: Vec<&'static str> = tables::CROP_CATALOG
        .iter()
        .copied()
        .filter(|crop| *crop != exclude)
        .filter(|crop| tables::crop_tolerance(crop).is_some_and(|t| t.grows_in_season(season)))
        .collect();

    let Some(first) = candidates.first() else {
        return tables::FALLBACK_CROP.to_string();
    };

    let regional = tables::region_profile(region).crops;
    let pick = candidates
        .iter()
        .find(|crop| regional.contains(crop))
        .unwrap_or(first);

    capitalize(pick)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_returns_the_excluded_crop() {
        // The fixed fallback is exempt: excluding wheat when wheat is the
        // only seasonal candidate still yields "Wheat".
        for month in Month::ALL {
            for region in Region::ALL {
                for crop in tables::CROP_CATALOG {
                    let alternative = find_alternative(region, month, crop);
                    if alternative != tables::FALLBACK_CROP {
                        assert_ne!(alternative.to_lowercase(), crop.to_lowercase());
                    }
                }
            }
        }
    }

    #[test]
    fn prefers_regionally_grown_candidates() {
        // Monsoon candidates in catalog order: rice, maize, cotton,
        // groundnut, jute. North grows rice, so rice wins over maize.
        assert_eq!(
            find_alternative(Region::North, Month::July, "wheat"),
            "Rice"
        );
        // With rice excluded, cotton is the first candidate North grows.
        assert_eq!(
            find_alternative(Region::North, Month::July, "rice"),
            "Cotton"
        );
    }

    #[test]
    fn falls_back_to_catalog_order_without_regional_match() {
        // Central grows soybean/wheat/cotton/pulses; of the Monsoon
        // candidates rice, maize, groundnut, jute none qualify, so the
        // first catalog candidate is returned.
        assert_eq!(
            find_alternative(Region::Central, Month::July, "cotton"),
            "Rice"
        );
    }

    #[test]
    fn wheat_fallback_when_no_candidate_fits_season() {
        // Wheat is the only Winter crop in the tolerance tables, so
        // excluding it leaves an empty candidate list.
        assert_eq!(
            find_alternative(Region::North, Month::January, "wheat"),
            "Wheat"
        );
    }

    #[test]
    fn exclusion_is_case_insensitive() {
        assert_eq!(
            find_alternative(Region::North, Month::July, "RICE"),
            "Cotton"
        );
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("rice"), "Rice");
        assert_eq!(capitalize("r"), "R");
        assert_eq!(capitalize(""), "");
    }
}
