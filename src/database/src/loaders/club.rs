use serde::Deserialize;

const STATIC_CLUBS_JSON: &str = include_str!("../data/clubs.json");

#[derive(Deserialize)]
pub struct ClubEntity {
    pub code: String,
    pub name: String,
    /// Baseline difficulty of facing this club, 1-5.
    pub fdr: u8,
}

pub struct SeedDatabase {
    pub clubs: Vec<ClubEntity>,
}

impl SeedDatabase {
    pub fn load() -> SeedDatabase {
        SeedDatabase {
            clubs: serde_json::from_str(STATIC_CLUBS_JSON).unwrap(),
        }
    }
}
