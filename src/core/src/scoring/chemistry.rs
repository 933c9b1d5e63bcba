use crate::player::Player;
use crate::squad::MAX_PER_CLUB;
use std::collections::HashMap;

pub const CHEMISTRY_BONUS_POINTS: i32 = 15;

/// Squad-cohesion predicate behind the chemistry bonus. The scoring
/// engine only ever receives the resulting bonus value, so the rule can
/// be swapped without touching score computation.
pub trait ChemistryRule: Send + Sync {
    fn bonus(&self, squad_players: &[&Player]) -> i32;
}

/// Flat bonus when enough of the XI share one real club. The club quota
/// caps any single club at `MAX_PER_CLUB` players, so the default
/// threshold is the quota itself: a full pair from one club earns the
/// bonus, and every legal squad can reach it.
#[derive(Debug, Clone)]
pub struct ClubCohesionRule {
    pub min_shared_club: usize,
}

impl Default for ClubCohesionRule {
    fn default() -> Self {
        ClubCohesionRule {
            min_shared_club: MAX_PER_CLUB,
        }
    }
}

impl ChemistryRule for ClubCohesionRule {
    fn bonus(&self, squad_players: &[&Player]) -> i32 {
        let mut per_club: HashMap<&str, usize> = HashMap::new();
        for player in squad_players {
            *per_club.entry(player.club_code.as_str()).or_default() += 1;
        }

        if per_club.values().any(|&count| count >= self.min_shared_club) {
            CHEMISTRY_BONUS_POINTS
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Position;
    use crate::shared::FullName;
    use crate::squad::RosterValidator;

    fn player(id: u32, club: &str, position: Position, cost: f32) -> Player {
        Player::new(
            id,
            FullName::new(format!("First{}", id), format!("Last{}", id)),
            club.to_string(),
            position,
            cost,
        )
    }

    fn squad_with_pair(paired_club: &str) -> Vec<Player> {
        let mut players = vec![
            player(1, paired_club, Position::Goalkeeper, 4.0),
            player(2, paired_club, Position::Defender, 4.5),
        ];
        for (i, club) in ["MCI", "LIV", "CHE"].iter().enumerate() {
            players.push(player(3 + i as u32, club, Position::Defender, 4.5));
        }
        for (i, club) in ["NEW", "AVL", "BHA", "WHU"].iter().enumerate() {
            players.push(player(6 + i as u32, club, Position::Midfielder, 5.0));
        }
        players.push(player(10, "FUL", Position::Forward, 6.0));
        players.push(player(11, "EVE", Position::Forward, 6.0));
        players
    }

    #[test]
    fn test_legal_club_pair_earns_default_bonus() {
        let players = squad_with_pair("ARS");
        let refs: Vec<&Player> = players.iter().collect();

        // the pair-bearing squad passes validation, so the default
        // threshold is reachable without breaking the club quota
        assert!(RosterValidator::validate(&refs, 1, 2).is_ok());
        assert_eq!(
            ClubCohesionRule::default().bonus(&refs),
            CHEMISTRY_BONUS_POINTS
        );
    }

    #[test]
    fn test_no_bonus_when_all_clubs_distinct() {
        let clubs = [
            "ARS", "MCI", "LIV", "CHE", "TOT", "NEW", "AVL", "BHA", "WHU", "FUL", "EVE",
        ];
        let players: Vec<Player> = clubs
            .iter()
            .enumerate()
            .map(|(i, club)| player(i as u32 + 1, club, Position::Midfielder, 5.0))
            .collect();
        let refs: Vec<&Player> = players.iter().collect();

        assert_eq!(ClubCohesionRule::default().bonus(&refs), 0);
    }

    #[test]
    fn test_raised_threshold_ignores_a_pair() {
        let players = squad_with_pair("ARS");
        let refs: Vec<&Player> = players.iter().collect();

        let rule = ClubCohesionRule { min_shared_club: 3 };
        assert_eq!(rule.bonus(&refs), 0);
    }
}
