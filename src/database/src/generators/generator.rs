use crate::generators::{PlayerGenerator, ScheduleGenerator};
use crate::loaders::SeedDatabase;
use crate::world::{Club, Fixture, World};
use chrono::NaiveDate;
use core::Player;
use log::debug;

const SEASON_START: (i32, u32, u32) = (2025, 8, 16);

pub struct WorldGenerator;

impl WorldGenerator {
    /// Builds the season world from seed clubs: generated rosters, a
    /// round-robin schedule and the fixture difficulty table.
    pub fn generate(seed: &SeedDatabase) -> World {
        let clubs: Vec<Club> = seed
            .clubs
            .iter()
            .map(|entity| Club {
                code: entity.code.clone(),
                name: entity.name.clone(),
                fdr: entity.fdr,
            })
            .collect();

        let players: Vec<Player> = clubs
            .iter()
            .flat_map(|club| PlayerGenerator::generate_club_players(&club.code))
            .collect();

        let club_codes: Vec<String> = clubs.iter().map(|club| club.code.clone()).collect();
        let (year, month, day) = SEASON_START;
        let season_start = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let (gameweeks, scheduled) = ScheduleGenerator::generate(&club_codes, season_start);

        let fixtures: Vec<Fixture> = scheduled
            .into_iter()
            .map(|fixture| Fixture {
                gw_code: fixture.gw_code,
                home_club: fixture.home_club,
                away_club: fixture.away_club,
                played: false,
            })
            .collect();

        debug!(
            "generated {} players and {} fixtures across {} gameweeks",
            players.len(),
            fixtures.len(),
            gameweeks.len()
        );

        World::new(clubs, players, gameweeks, fixtures)
    }
}
