use crate::player::{Player, Position};
use crate::squad::{BUDGET_CAP, MAX_PER_CLUB, SQUAD_SIZE};
use itertools::Itertools;
use log::debug;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// A single broken squad rule. The validator reports every broken rule at
/// once so the client can render one message per rule instead of
/// resubmitting blind.
#[derive(Debug, Clone, PartialEq)]
pub enum SquadRuleViolation {
    SquadSize {
        selected: usize,
    },
    DuplicateSelection {
        player_id: u32,
    },
    GoalkeeperCount {
        count: usize,
    },
    DefenderCount {
        count: usize,
    },
    MidfielderCount {
        count: usize,
    },
    ForwardCount {
        count: usize,
    },
    ClubQuotaExceeded {
        club_code: String,
        count: usize,
    },
    BudgetExceeded {
        total_cost: f32,
        overage: f32,
    },
    CaptainNotInSquad {
        player_id: u32,
    },
    ViceCaptainNotInSquad {
        player_id: u32,
    },
    CaptainViceConflict {
        player_id: u32,
    },
}

impl Display for SquadRuleViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SquadRuleViolation::SquadSize { selected } => {
                write!(f, "you must select exactly {} players (currently {})", SQUAD_SIZE, selected)
            }
            SquadRuleViolation::DuplicateSelection { player_id } => {
                write!(f, "player {} appears more than once in the selection", player_id)
            }
            SquadRuleViolation::GoalkeeperCount { count } => {
                write!(f, "your XI must contain exactly 1 goalkeeper (currently {})", count)
            }
            SquadRuleViolation::DefenderCount { count } => {
                write!(f, "your XI must contain 3 to 5 defenders (currently {})", count)
            }
            SquadRuleViolation::MidfielderCount { count } => {
                write!(f, "your XI must contain 2 to 5 midfielders (currently {})", count)
            }
            SquadRuleViolation::ForwardCount { count } => {
                write!(f, "your XI must contain 1 to 4 forwards (currently {})", count)
            }
            SquadRuleViolation::ClubQuotaExceeded { club_code, count } => {
                write!(f, "too many players from {}: {} (max {})", club_code, count, MAX_PER_CLUB)
            }
            SquadRuleViolation::BudgetExceeded { total_cost, overage } => {
                write!(
                    f,
                    "budget exceeded: {:.1}M used, {:.1}M over the {:.0}M cap",
                    total_cost, overage, BUDGET_CAP
                )
            }
            SquadRuleViolation::CaptainNotInSquad { player_id } => {
                write!(f, "captain {} must be one of the selected XI", player_id)
            }
            SquadRuleViolation::ViceCaptainNotInSquad { player_id } => {
                write!(f, "vice-captain {} must be one of the selected XI", player_id)
            }
            SquadRuleViolation::CaptainViceConflict { player_id } => {
                write!(
                    f,
                    "captain and vice-captain must be different players (both {})",
                    player_id
                )
            }
        }
    }
}

pub struct RosterValidator;

impl RosterValidator {
    /// Pure rule check over a candidate XI. Never mutates anything;
    /// persisting an accepted squad is the caller's job.
    pub fn validate(
        candidates: &[&Player],
        captain_id: u32,
        vice_captain_id: u32,
    ) -> Result<(), Vec<SquadRuleViolation>> {
        let mut violations = Vec::new();

        if candidates.len() != SQUAD_SIZE {
            violations.push(SquadRuleViolation::SquadSize {
                selected: candidates.len(),
            });
        }

        for player_id in candidates.iter().map(|p| p.id).duplicates().sorted() {
            violations.push(SquadRuleViolation::DuplicateSelection { player_id });
        }

        Self::check_formation(candidates, &mut violations);
        Self::check_club_quota(candidates, &mut violations);
        Self::check_budget(candidates, &mut violations);
        Self::check_armbands(candidates, captain_id, vice_captain_id, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            debug!("squad selection rejected with {} violations", violations.len());
            Err(violations)
        }
    }

    fn check_formation(candidates: &[&Player], violations: &mut Vec<SquadRuleViolation>) {
        let count_of = |position: Position| {
            candidates
                .iter()
                .filter(|p| p.position == position)
                .count()
        };

        let goalkeepers = count_of(Position::Goalkeeper);
        if goalkeepers != 1 {
            violations.push(SquadRuleViolation::GoalkeeperCount { count: goalkeepers });
        }

        let defenders = count_of(Position::Defender);
        if !(3..=5).contains(&defenders) {
            violations.push(SquadRuleViolation::DefenderCount { count: defenders });
        }

        let midfielders = count_of(Position::Midfielder);
        if !(2..=5).contains(&midfielders) {
            violations.push(SquadRuleViolation::MidfielderCount { count: midfielders });
        }

        let forwards = count_of(Position::Forward);
        if !(1..=4).contains(&forwards) {
            violations.push(SquadRuleViolation::ForwardCount { count: forwards });
        }
    }

    fn check_club_quota(candidates: &[&Player], violations: &mut Vec<SquadRuleViolation>) {
        let mut per_club: HashMap<&str, usize> = HashMap::new();
        for player in candidates {
            *per_club.entry(player.club_code.as_str()).or_default() += 1;
        }

        for (club_code, count) in per_club.into_iter().sorted() {
            if count > MAX_PER_CLUB {
                violations.push(SquadRuleViolation::ClubQuotaExceeded {
                    club_code: club_code.to_string(),
                    count,
                });
            }
        }
    }

    fn check_budget(candidates: &[&Player], violations: &mut Vec<SquadRuleViolation>) {
        let total_cost: f32 = candidates.iter().map(|p| p.cost).sum();

        if total_cost > BUDGET_CAP {
            violations.push(SquadRuleViolation::BudgetExceeded {
                total_cost,
                overage: total_cost - BUDGET_CAP,
            });
        }
    }

    fn check_armbands(
        candidates: &[&Player],
        captain_id: u32,
        vice_captain_id: u32,
        violations: &mut Vec<SquadRuleViolation>,
    ) {
        let in_squad = |player_id: u32| candidates.iter().any(|p| p.id == player_id);

        if !in_squad(captain_id) {
            violations.push(SquadRuleViolation::CaptainNotInSquad {
                player_id: captain_id,
            });
        }

        if !in_squad(vice_captain_id) {
            violations.push(SquadRuleViolation::ViceCaptainNotInSquad {
                player_id: vice_captain_id,
            });
        }

        if captain_id == vice_captain_id {
            violations.push(SquadRuleViolation::CaptainViceConflict {
                player_id: captain_id,
            });
        }
    }
}
