use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Medium difficulty, used when a club has no rating or no fixtures left.
pub const DEFAULT_FDR: f32 = 3.0;

/// How many upcoming fixtures feed the average.
pub const FDR_LOOKAHEAD: usize = 5;

/// One upcoming fixture as shown next to a recommendation, so the client
/// can render per-fixture difficulty without recomputing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureOutlook {
    pub gw_code: String,
    pub opponent: String,
    pub home: bool,
    /// Ordinal 1-5, lower is easier.
    pub rating: u8,
}

/// Per-club difficulty ratings with a home-advantage adjustment.
#[derive(Debug, Clone, Default)]
pub struct FixtureDifficulty {
    ratings: HashMap<String, u8>,
}

impl FixtureDifficulty {
    pub fn new(ratings: HashMap<String, u8>) -> Self {
        FixtureDifficulty { ratings }
    }

    /// Difficulty of facing `opponent`. Playing at home knocks one point
    /// off; the result stays inside 1..=5.
    pub fn rating(&self, opponent: &str, home: bool) -> u8 {
        let base = self.ratings.get(opponent).copied().unwrap_or(3);

        if home {
            base.saturating_sub(1).clamp(1, 5)
        } else {
            base.clamp(1, 5)
        }
    }

    /// Average rating over a fixture list; `DEFAULT_FDR` when empty.
    pub fn average(fixtures: &[FixtureOutlook]) -> f32 {
        if fixtures.is_empty() {
            return DEFAULT_FDR;
        }

        let total: u32 = fixtures.iter().map(|f| f.rating as u32).sum();
        total as f32 / fixtures.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn difficulty() -> FixtureDifficulty {
        FixtureDifficulty::new(HashMap::from([
            ("ARS".to_string(), 5),
            ("WOL".to_string(), 1),
        ]))
    }

    #[test]
    fn test_home_advantage_lowers_rating() {
        let fdr = difficulty();

        assert_eq!(fdr.rating("ARS", false), 5);
        assert_eq!(fdr.rating("ARS", true), 4);
    }

    #[test]
    fn test_rating_clamped_to_scale() {
        let fdr = difficulty();

        // already easiest; home advantage cannot go below 1
        assert_eq!(fdr.rating("WOL", true), 1);
    }

    #[test]
    fn test_unknown_opponent_defaults_to_medium() {
        let fdr = difficulty();

        assert_eq!(fdr.rating("ZZZ", false), 3);
        assert_eq!(fdr.rating("ZZZ", true), 2);
    }

    #[test]
    fn test_average_of_empty_schedule_is_default() {
        assert_eq!(FixtureDifficulty::average(&[]), DEFAULT_FDR);
    }

    #[test]
    fn test_average_over_fixtures() {
        let fixtures = vec![
            FixtureOutlook {
                gw_code: "GW03".to_string(),
                opponent: "ARS".to_string(),
                home: false,
                rating: 5,
            },
            FixtureOutlook {
                gw_code: "GW04".to_string(),
                opponent: "WOL".to_string(),
                home: true,
                rating: 1,
            },
        ];

        assert_eq!(FixtureDifficulty::average(&fixtures), 3.0);
    }
}
