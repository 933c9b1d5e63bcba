use serde::{Deserialize, Serialize};

pub const SQUAD_SIZE: usize = 11;
pub const BUDGET_CAP: f32 = 100.0;
pub const MAX_PER_CLUB: usize = 2;

/// One of the 11 lineup rows persisted per (team, gameweek).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadSlot {
    pub slot_no: u8,
    pub player_id: u32,
    pub captain: bool,
    pub vice_captain: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Squad {
    pub slots: Vec<SquadSlot>,
}

impl Squad {
    /// Builds the initial lineup from an already validated selection,
    /// slots numbered 1..=11 in selection order.
    pub fn from_selection(player_ids: &[u32], captain_id: u32, vice_captain_id: u32) -> Self {
        let slots = player_ids
            .iter()
            .enumerate()
            .map(|(idx, &player_id)| SquadSlot {
                slot_no: (idx + 1) as u8,
                player_id,
                captain: player_id == captain_id,
                vice_captain: player_id == vice_captain_id,
            })
            .collect();

        Squad { slots }
    }

    pub fn player_ids(&self) -> Vec<u32> {
        self.slots.iter().map(|slot| slot.player_id).collect()
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.slots.iter().any(|slot| slot.player_id == player_id)
    }

    pub fn captain_id(&self) -> Option<u32> {
        self.slots
            .iter()
            .find(|slot| slot.captain)
            .map(|slot| slot.player_id)
    }

    pub fn vice_captain_id(&self) -> Option<u32> {
        self.slots
            .iter()
            .find(|slot| slot.vice_captain)
            .map(|slot| slot.player_id)
    }

    /// Swaps a player out of their slot. The slot keeps its number; any
    /// armband the outgoing player held is cleared, never reassigned.
    /// Returns (held_captain, held_vice) so callers can tell the manager
    /// a re-selection is required.
    pub fn replace_player(&mut self, player_out_id: u32, player_in_id: u32) -> (bool, bool) {
        for slot in &mut self.slots {
            if slot.player_id == player_out_id {
                let held_captain = slot.captain;
                let held_vice = slot.vice_captain;

                slot.player_id = player_in_id;
                slot.captain = false;
                slot.vice_captain = false;

                return (held_captain, held_vice);
            }
        }

        (false, false)
    }

    /// Re-arms captain and vice-captain across the whole lineup.
    pub fn set_captains(&mut self, captain_id: u32, vice_captain_id: u32) {
        for slot in &mut self.slots {
            slot.captain = slot.player_id == captain_id;
            slot.vice_captain = slot.player_id == vice_captain_id;
        }
    }
}
