use crate::squad::Squad;
use serde::Serialize;
use std::collections::HashMap;

/// Gameweek score breakdown for one fantasy team. `total` is what the
/// standings show: raw sum, plus the captain counted once more, plus any
/// chemistry bonus supplied by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct TeamScore {
    pub raw_total: i32,
    pub captain_bonus: i32,
    pub chemistry_bonus: i32,
    pub total: i32,
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Pure computation over supplied inputs. Only meaningful for a
    /// simulated gameweek; before that the caller must report the score
    /// as unavailable rather than zero, so the gate lives with the
    /// caller, not here.
    ///
    /// The captain's raw points are added once more on top of the base
    /// sum. The vice-captain has no multiplier: a did-not-play fallback
    /// would need a sentinel this slice does not carry, so the vice
    /// stays a quiet backup.
    ///
    /// Players missing from `points_by_player` contribute zero, and the
    /// chemistry bonus arrives from the caller's cohesion rule; it is
    /// never fabricated here.
    pub fn compute(
        squad: &Squad,
        points_by_player: &HashMap<u32, i32>,
        chemistry_bonus: i32,
    ) -> TeamScore {
        let raw_points =
            |player_id: u32| points_by_player.get(&player_id).copied().unwrap_or(0);

        let raw_total: i32 = squad
            .slots
            .iter()
            .map(|slot| raw_points(slot.player_id))
            .sum();

        let captain_bonus = squad.captain_id().map(raw_points).unwrap_or(0);

        TeamScore {
            raw_total,
            captain_bonus,
            chemistry_bonus,
            total: raw_total + captain_bonus + chemistry_bonus,
        }
    }
}
