use crate::error::EngineError;
use crate::gameweek::Gameweek;
use crate::player::Player;
use crate::squad::{Squad, BUDGET_CAP, MAX_PER_CLUB};
use serde::{Deserialize, Serialize};

pub const WEEKLY_TRANSFER_CAP: usize = 3;

/// Append-only ledger row scoped to (team, gameweek). Never mutated or
/// deleted once written; transfers-remaining is derived by counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRecord {
    pub sequence_no: u8,
    pub player_out_id: u32,
    pub player_in_id: u32,
}

/// What an accepted proposal tells the caller to commit: the ledger row
/// to append plus the facts needed for the response. The ledger itself
/// mutates nothing, so a rejection at any precondition leaves squad and
/// history untouched.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    pub record: TransferRecord,
    pub new_squad_cost: f32,
    pub cleared_captain: bool,
    pub cleared_vice_captain: bool,
    pub remaining_after: usize,
}

pub struct TransferLedger;

impl TransferLedger {
    /// Precondition chain for a position-for-position swap, checked in
    /// order with the first failure winning: window open, outgoing player
    /// in the lineup, incoming player not in it, matching position,
    /// budget after the swap, club quota after the swap, weekly cap.
    pub fn propose(
        gameweek: &Gameweek,
        squad: &Squad,
        squad_players: &[&Player],
        records: &[TransferRecord],
        player_out: &Player,
        player_in: &Player,
    ) -> Result<TransferOutcome, EngineError> {
        if !gameweek.is_window_open() {
            return Err(EngineError::WindowClosed {
                gw_code: gameweek.code.clone(),
            });
        }

        if !squad.contains(player_out.id) {
            return Err(EngineError::PlayerNotInLineup {
                player_id: player_out.id,
            });
        }

        if squad.contains(player_in.id) {
            return Err(EngineError::PlayerAlreadyInLineup {
                player_id: player_in.id,
            });
        }

        if player_out.position != player_in.position {
            return Err(EngineError::PositionMismatch {
                outgoing: player_out.position,
                incoming: player_in.position,
            });
        }

        let current_cost: f32 = squad_players.iter().map(|p| p.cost).sum();
        let new_cost = current_cost - player_out.cost + player_in.cost;

        if new_cost > BUDGET_CAP {
            return Err(EngineError::BudgetExceeded {
                new_cost,
                cap: BUDGET_CAP,
            });
        }

        let incoming_club_count = squad_players
            .iter()
            .filter(|p| p.id != player_out.id && p.club_code == player_in.club_code)
            .count()
            + 1;

        if incoming_club_count > MAX_PER_CLUB {
            return Err(EngineError::ClubQuotaExceeded {
                club_code: player_in.club_code.clone(),
                quota: MAX_PER_CLUB,
            });
        }

        let used = records.len();
        if used >= WEEKLY_TRANSFER_CAP {
            return Err(EngineError::TransferLimitReached {
                cap: WEEKLY_TRANSFER_CAP,
            });
        }

        Ok(TransferOutcome {
            record: TransferRecord {
                sequence_no: (used + 1) as u8,
                player_out_id: player_out.id,
                player_in_id: player_in.id,
            },
            new_squad_cost: new_cost,
            cleared_captain: squad.captain_id() == Some(player_out.id),
            cleared_vice_captain: squad.vice_captain_id() == Some(player_out.id),
            remaining_after: WEEKLY_TRANSFER_CAP - used - 1,
        })
    }

    /// Transfers left for a (team, gameweek); never negative.
    pub fn remaining(records: &[TransferRecord]) -> usize {
        WEEKLY_TRANSFER_CAP.saturating_sub(records.len())
    }
}
