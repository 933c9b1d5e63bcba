use core::shared::FullName;
use core::utils::IntegerUtils;
use core::{Player, Position};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

static PLAYER_ID_SEQUENCE: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(1));

/// Roster shape generated per club: 2 GK, 5 DEF, 5 MID, 3 FWD.
const CLUB_POSITION_SPREAD: &[(Position, usize)] = &[
    (Position::Goalkeeper, 2),
    (Position::Defender, 5),
    (Position::Midfielder, 5),
    (Position::Forward, 3),
];

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Adam", "Alex", "Andre", "Ben", "Bruno", "Callum", "Carlos", "Daniel", "Darwin",
    "Declan", "Diego", "Dominic", "Eberechi", "Emile", "Gabriel", "Harry", "Hugo", "Jack",
    "James", "Jarrod", "Joao", "Jordan", "Kai", "Kieran", "Leandro", "Lucas", "Marcus", "Mason",
    "Matheus", "Michael", "Mohamed", "Nathan", "Nick", "Ollie", "Pedro", "Phil", "Raheem",
    "Reece", "Rodrigo", "Ryan", "Sandro", "Sean", "Thiago", "Tomas", "Tyrone", "Victor",
    "Vitaly", "William", "Youri",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Almiron", "Anderson", "Baker", "Barnes", "Bowen", "Campbell", "Carvalho", "Clark",
    "Collins", "Cook", "Cunha", "Davis", "Dias", "Edwards", "Evans", "Fernandes", "Ferreira",
    "Garcia", "Gomes", "Gordon", "Gray", "Henderson", "Hughes", "Johnson", "Jones", "Kelly",
    "Lewis", "Martinez", "Mitchell", "Moreno", "Murphy", "Neto", "Olise", "Palmer", "Pereira",
    "Ramsey", "Richards", "Roberts", "Rodriguez", "Santos", "Silva", "Smith", "Taylor",
    "Thomas", "Walker", "Ward", "Watkins", "White", "Wilson",
];

pub struct PlayerGenerator;

impl PlayerGenerator {
    pub fn generate_club_players(club_code: &str) -> Vec<Player> {
        CLUB_POSITION_SPREAD
            .iter()
            .flat_map(|&(position, count)| {
                (0..count).map(move |_| Self::generate(club_code, position))
            })
            .collect()
    }

    pub fn generate(club_code: &str, position: Position) -> Player {
        Player::new(
            PLAYER_ID_SEQUENCE.fetch_add(1, Ordering::SeqCst),
            FullName::new(Self::random_pick(FIRST_NAMES), Self::random_pick(LAST_NAMES)),
            club_code.to_string(),
            position,
            Self::random_cost(position),
        )
    }

    /// Prices land on a one-decimal grid, the same precision they are
    /// displayed with.
    fn random_cost(position: Position) -> f32 {
        let (min_tenths, max_tenths) = match position {
            Position::Goalkeeper => (40, 55),
            Position::Defender => (40, 65),
            Position::Midfielder => (45, 100),
            Position::Forward => (45, 120),
        };

        IntegerUtils::random(min_tenths, max_tenths) as f32 / 10.0
    }

    fn random_pick(pool: &[&str]) -> String {
        pool[IntegerUtils::random(0, pool.len() as i32 - 1) as usize].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_of(players: &[Player], position: Position) -> usize {
        players.iter().filter(|p| p.position == position).count()
    }

    #[test]
    fn test_club_roster_shape() {
        let players = PlayerGenerator::generate_club_players("ARS");

        assert_eq!(players.len(), 15);
        assert_eq!(count_of(&players, Position::Goalkeeper), 2);
        assert_eq!(count_of(&players, Position::Defender), 5);
        assert_eq!(count_of(&players, Position::Midfielder), 5);
        assert_eq!(count_of(&players, Position::Forward), 3);
        assert!(players.iter().all(|p| p.club_code == "ARS"));
    }

    #[test]
    fn test_ids_unique_across_clubs() {
        let mut ids: Vec<u32> = PlayerGenerator::generate_club_players("AAA")
            .into_iter()
            .chain(PlayerGenerator::generate_club_players("BBB"))
            .map(|p| p.id)
            .collect();

        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 30);
    }

    #[test]
    fn test_costs_within_position_bands() {
        for _ in 0..20 {
            let keeper = PlayerGenerator::generate("ARS", Position::Goalkeeper);
            assert!((4.0..=5.5).contains(&keeper.cost));

            let forward = PlayerGenerator::generate("ARS", Position::Forward);
            assert!((4.5..=12.0).contains(&forward.cost));
        }
    }

    #[test]
    fn test_new_players_start_with_zero_points() {
        let player = PlayerGenerator::generate("ARS", Position::Midfielder);

        assert_eq!(player.total_points, 0);
    }
}
