//! Crop recommendation models and the soil/season suggestion table

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored recommendation request together with its computed suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub id: Uuid,
    pub location: String,
    pub soil_type: String,
    pub season: String,
    pub farm_size: String,
    pub water_availability: String,
    pub budget: String,
    pub recommendations: Vec<CropSuggestion>,
}

/// Input for creating a recommendation request
///
/// Farm size, water availability and budget are recorded verbatim; the
/// suggestion table keys on soil type and season alone.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCropRecommendation {
    pub location: String,
    pub soil_type: String,
    pub season: String,
    pub farm_size: String,
    pub water_availability: String,
    pub budget: String,
}

/// A single suggested crop with static profitability figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSuggestion {
    pub name: String,
    /// Suitability score on a 0-100 scale
    pub profit_score: i32,
    pub expected_yield: String,
    pub profit_margin: String,
}

/// Soil categories the suggestion table recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilType {
    Clay,
    Loamy,
    Sandy,
    Silt,
}

impl SoilType {
    /// Parse an exact lowercase table key. Anything else is unknown soil.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "clay" => Some(SoilType::Clay),
            "loamy" => Some(SoilType::Loamy),
            "sandy" => Some(SoilType::Sandy),
            "silt" => Some(SoilType::Silt),
            _ => None,
        }
    }
}

/// Growing seasons the suggestion table recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Monsoon,
    Winter,
}

impl Season {
    /// Parse an exact lowercase table key. Anything else is unknown season.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "monsoon" => Some(Season::Monsoon),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

fn suggestion(name: &str, profit_score: i32, expected_yield: &str, profit_margin: &str) -> CropSuggestion {
    CropSuggestion {
        name: name.to_string(),
        profit_score,
        expected_yield: expected_yield.to_string(),
        profit_margin: profit_margin.to_string(),
    }
}

/// Look up crop suggestions for a soil type and season
///
/// Keys must match the table exactly (lowercase). Any pair outside the
/// table falls back to [`default_suggestions`]. The figures are fixed
/// agronomy estimates for the demo, not live data.
pub fn recommend_crops(soil_type: &str, season: &str) -> Vec<CropSuggestion> {
    let keys = (SoilType::from_key(soil_type), Season::from_key(season));
    let (soil, season) = match keys {
        (Some(soil), Some(season)) => (soil, season),
        _ => return default_suggestions(),
    };

    match (soil, season) {
        (SoilType::Clay, Season::Spring) => vec![
            suggestion("Rice", 92, "45 quintals/acre", "₹25,000/acre"),
            suggestion("Wheat", 88, "42 quintals/acre", "₹22,000/acre"),
        ],
        (SoilType::Clay, Season::Summer) => vec![
            suggestion("Cotton", 85, "20 quintals/acre", "₹35,000/acre"),
            suggestion("Sugarcane", 82, "80 tonnes/acre", "₹45,000/acre"),
        ],
        (SoilType::Clay, Season::Monsoon) => vec![
            suggestion("Rice", 95, "48 quintals/acre", "₹28,000/acre"),
            suggestion("Maize", 88, "40 quintals/acre", "₹20,000/acre"),
        ],
        (SoilType::Clay, Season::Winter) => vec![
            suggestion("Wheat", 90, "45 quintals/acre", "₹25,000/acre"),
            suggestion("Barley", 82, "38 quintals/acre", "₹20,000/acre"),
        ],
        (SoilType::Loamy, Season::Spring) => vec![
            suggestion("Wheat", 94, "50 quintals/acre", "₹28,000/acre"),
            suggestion("Barley", 87, "42 quintals/acre", "₹22,000/acre"),
        ],
        (SoilType::Loamy, Season::Summer) => vec![
            suggestion("Tomato", 95, "60 quintals/acre", "₹50,000/acre"),
            suggestion("Chilli", 89, "25 quintals/acre", "₹40,000/acre"),
        ],
        (SoilType::Loamy, Season::Monsoon) => vec![
            suggestion("Maize", 90, "45 quintals/acre", "₹25,000/acre"),
            suggestion("Soybean", 93, "28 quintals/acre", "₹30,000/acre"),
        ],
        (SoilType::Loamy, Season::Winter) => vec![
            suggestion("Potato", 91, "200 quintals/acre", "₹35,000/acre"),
            suggestion("Peas", 87, "20 quintals/acre", "₹25,000/acre"),
        ],
        (SoilType::Sandy, Season::Spring) => vec![
            suggestion("Groundnut", 92, "25 quintals/acre", "₹30,000/acre"),
            suggestion("Millet", 88, "15 quintals/acre", "₹18,000/acre"),
        ],
        (SoilType::Sandy, Season::Summer) => vec![
            suggestion("Watermelon", 85, "300 quintals/acre", "₹40,000/acre"),
            suggestion("Sesame", 89, "8 quintals/acre", "₹20,000/acre"),
        ],
        (SoilType::Sandy, Season::Monsoon) => vec![
            suggestion("Sorghum", 85, "25 quintals/acre", "₹20,000/acre"),
            suggestion("Groundnut", 92, "28 quintals/acre", "₹32,000/acre"),
        ],
        (SoilType::Sandy, Season::Winter) => vec![
            suggestion("Cumin", 90, "6 quintals/acre", "₹35,000/acre"),
            suggestion("Fennel", 87, "8 quintals/acre", "₹30,000/acre"),
        ],
        (SoilType::Silt, Season::Spring) => vec![
            suggestion("Rice", 89, "42 quintals/acre", "₹24,000/acre"),
            suggestion("Wheat", 91, "46 quintals/acre", "₹26,000/acre"),
        ],
        (SoilType::Silt, Season::Summer) => vec![
            suggestion("Cucumber", 82, "150 quintals/acre", "₹25,000/acre"),
            suggestion("Okra", 86, "80 quintals/acre", "₹30,000/acre"),
        ],
        (SoilType::Silt, Season::Monsoon) => vec![
            suggestion("Rice", 93, "47 quintals/acre", "₹27,000/acre"),
            suggestion("Jute", 78, "25 quintals/acre", "₹15,000/acre"),
        ],
        (SoilType::Silt, Season::Winter) => vec![
            suggestion("Mustard", 84, "18 quintals/acre", "₹22,000/acre"),
            suggestion("Lentil", 88, "12 quintals/acre", "₹25,000/acre"),
        ],
    }
}

/// Fallback suggestions for soil/season pairs outside the table
pub fn default_suggestions() -> Vec<CropSuggestion> {
    vec![
        suggestion("Mixed Farming", 80, "Variable", "₹20,000/acre"),
        suggestion("Consultation Needed", 75, "Contact Expert", "Variable"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ========================================================================
    // Suggestion Table Tests
    // ========================================================================

    #[test]
    fn test_every_table_pair_returns_its_two_crops() {
        let expected = [
            ("clay", "spring", ["Rice", "Wheat"]),
            ("clay", "summer", ["Cotton", "Sugarcane"]),
            ("clay", "monsoon", ["Rice", "Maize"]),
            ("clay", "winter", ["Wheat", "Barley"]),
            ("loamy", "spring", ["Wheat", "Barley"]),
            ("loamy", "summer", ["Tomato", "Chilli"]),
            ("loamy", "monsoon", ["Maize", "Soybean"]),
            ("loamy", "winter", ["Potato", "Peas"]),
            ("sandy", "spring", ["Groundnut", "Millet"]),
            ("sandy", "summer", ["Watermelon", "Sesame"]),
            ("sandy", "monsoon", ["Sorghum", "Groundnut"]),
            ("sandy", "winter", ["Cumin", "Fennel"]),
            ("silt", "spring", ["Rice", "Wheat"]),
            ("silt", "summer", ["Cucumber", "Okra"]),
            ("silt", "monsoon", ["Rice", "Jute"]),
            ("silt", "winter", ["Mustard", "Lentil"]),
        ];

        for (soil, season, names) in expected {
            let crops = recommend_crops(soil, season);
            assert_eq!(crops.len(), 2, "{soil}/{season}");
            assert_eq!(crops[0].name, names[0], "{soil}/{season}");
            assert_eq!(crops[1].name, names[1], "{soil}/{season}");
        }
    }

    #[test]
    fn test_loamy_summer_full_entries() {
        let crops = recommend_crops("loamy", "summer");
        assert_eq!(
            crops,
            vec![
                suggestion("Tomato", 95, "60 quintals/acre", "₹50,000/acre"),
                suggestion("Chilli", 89, "25 quintals/acre", "₹40,000/acre"),
            ]
        );
    }

    #[test]
    fn test_clay_monsoon_full_entries() {
        let crops = recommend_crops("clay", "monsoon");
        assert_eq!(
            crops,
            vec![
                suggestion("Rice", 95, "48 quintals/acre", "₹28,000/acre"),
                suggestion("Maize", 88, "40 quintals/acre", "₹20,000/acre"),
            ]
        );
    }

    #[test]
    fn test_unknown_soil_falls_back_to_default() {
        assert_eq!(recommend_crops("peaty", "summer"), default_suggestions());
    }

    #[test]
    fn test_unknown_season_falls_back_to_default() {
        assert_eq!(recommend_crops("clay", "autumn"), default_suggestions());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert_eq!(recommend_crops("Clay", "spring"), default_suggestions());
        assert_eq!(recommend_crops("clay", "Spring"), default_suggestions());
    }

    #[test]
    fn test_default_suggestions_entries() {
        let crops = default_suggestions();
        assert_eq!(crops.len(), 2);
        assert_eq!(crops[0].name, "Mixed Farming");
        assert_eq!(crops[0].profit_score, 80);
        assert_eq!(crops[1].name, "Consultation Needed");
        assert_eq!(crops[1].expected_yield, "Contact Expert");
        assert_eq!(crops[1].profit_margin, "Variable");
    }

    #[test]
    fn test_suggestion_serializes_camel_case() {
        let value = serde_json::to_value(suggestion(
            "Tomato",
            95,
            "60 quintals/acre",
            "₹50,000/acre",
        ))
        .unwrap();
        assert_eq!(value["name"], "Tomato");
        assert_eq!(value["profitScore"], 95);
        assert_eq!(value["expectedYield"], "60 quintals/acre");
        assert_eq!(value["profitMargin"], "₹50,000/acre");
    }

    // ========================================================================
    // Property Tests
    // ========================================================================

    proptest! {
        #[test]
        fn prop_lookup_always_returns_two_suggestions(
            soil in "[a-zA-Z]{0,12}",
            season in "[a-zA-Z]{0,12}",
        ) {
            let crops = recommend_crops(&soil, &season);
            prop_assert_eq!(crops.len(), 2);
            for crop in &crops {
                prop_assert!((0..=100).contains(&crop.profit_score));
                prop_assert!(!crop.name.is_empty());
            }
        }

        #[test]
        fn prop_lookup_is_deterministic(
            soil in "[a-z]{0,8}",
            season in "[a-z]{0,8}",
        ) {
            prop_assert_eq!(
                recommend_crops(&soil, &season),
                recommend_crops(&soil, &season)
            );
        }
    }
}
