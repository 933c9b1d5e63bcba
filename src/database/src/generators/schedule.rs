use chrono::{Days, NaiveDate};
use core::Gameweek;

/// One generated fixture before it is committed into the world.
pub struct ScheduledFixture {
    pub gw_code: String,
    pub home_club: String,
    pub away_club: String,
}

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Single round robin by the circle method: one round per gameweek,
    /// every club playing once per round. With n clubs that is n-1
    /// gameweeks a week apart; an odd club count gives one club a bye
    /// each round.
    pub fn generate(
        club_codes: &[String],
        season_start: NaiveDate,
    ) -> (Vec<Gameweek>, Vec<ScheduledFixture>) {
        let mut rotation: Vec<&str> = club_codes.iter().map(|code| code.as_str()).collect();
        if rotation.len() % 2 != 0 {
            rotation.push("");
        }

        let rounds = rotation.len().saturating_sub(1);
        let mut gameweeks = Vec::with_capacity(rounds);
        let mut fixtures = Vec::new();

        for round in 0..rounds {
            let number = (round + 1) as u8;
            let code = format!("GW{:02}", number);

            gameweeks.push(Gameweek::new(
                code.clone(),
                number,
                season_start + Days::new(7 * round as u64),
            ));

            for pair in 0..rotation.len() / 2 {
                let first = rotation[pair];
                let second = rotation[rotation.len() - 1 - pair];
                if first.is_empty() || second.is_empty() {
                    continue;
                }

                // alternate venues so no club hosts every week
                let (home, away) = if round % 2 == 0 {
                    (first, second)
                } else {
                    (second, first)
                };

                fixtures.push(ScheduledFixture {
                    gw_code: code.clone(),
                    home_club: home.to_string(),
                    away_club: away.to_string(),
                });
            }

            // first club stays fixed, the rest rotate one step
            rotation[1..].rotate_right(1);
        }

        (gameweeks, fixtures)
    }
}
