pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use core::Position;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LineupRequest {
    pub team_id: u32,
    pub gw_code: String,
}

#[derive(Serialize)]
pub struct LineupResponse {
    pub team_id: u32,
    pub team_name: String,
    pub gw_code: String,
    pub captain_id: Option<u32>,
    pub vice_captain_id: Option<u32>,
    pub total_cost: f32,
    pub slots: Vec<LineupSlotDto>,
}

#[derive(Serialize)]
pub struct LineupSlotDto {
    pub slot_no: u8,
    pub player_id: u32,
    pub name: String,
    pub club_code: String,
    pub position: Position,
    pub cost: f32,
    pub captain: bool,
    pub vice_captain: bool,
}

pub async fn team_lineup_action(
    State(state): State<AppData>,
    Path(route_params): Path<LineupRequest>,
) -> ApiResult<impl IntoResponse> {
    let world = state.world.read().await;

    let team = world.team(route_params.team_id)?;
    let squad = world.lineup(route_params.team_id, &route_params.gw_code)?;

    let mut slots = Vec::with_capacity(squad.slots.len());
    let mut total_cost = 0.0;

    for slot in &squad.slots {
        let player = world.player(slot.player_id)?;
        total_cost += player.cost;

        slots.push(LineupSlotDto {
            slot_no: slot.slot_no,
            player_id: slot.player_id,
            name: player.full_name.to_string(),
            club_code: player.club_code.clone(),
            position: player.position,
            cost: player.cost,
            captain: slot.captain,
            vice_captain: slot.vice_captain,
        });
    }

    Ok(Json(LineupResponse {
        team_id: team.id,
        team_name: team.name.clone(),
        gw_code: route_params.gw_code,
        captain_id: squad.captain_id(),
        vice_captain_id: squad.vice_captain_id(),
        total_cost,
        slots,
    }))
}
