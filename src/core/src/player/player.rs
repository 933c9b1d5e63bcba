use crate::player::Position;
use crate::shared::FullName;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: u32,
    pub full_name: FullName,
    pub club_code: String,
    pub position: Position,
    /// Price in monetary units with one decimal of precision.
    pub cost: f32,
    /// Season total across simulated gameweeks.
    pub total_points: i32,
}

impl Player {
    pub fn new(
        id: u32,
        full_name: FullName,
        club_code: String,
        position: Position,
        cost: f32,
    ) -> Self {
        Player {
            id,
            full_name,
            club_code,
            position,
            cost,
            total_points: 0,
        }
    }
}
