pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CreateTeamRequest {
    pub manager_id: u32,
    pub team_name: String,
    pub gw_code: String,
    pub player_ids: Vec<u32>,
    pub captain_id: u32,
    pub vice_captain_id: u32,
}

#[derive(Serialize)]
pub struct CreateTeamResponse {
    pub team_id: u32,
    pub manager_id: u32,
    pub team_name: String,
    pub gw_code: String,
    pub squad_cost: f32,
}

pub async fn team_create_action(
    State(state): State<AppData>,
    Json(request): Json<CreateTeamRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut world = state.world.write().await;

    let team_id = world.create_fantasy_team(
        request.manager_id,
        &request.team_name,
        &request.gw_code,
        &request.player_ids,
        request.captain_id,
        request.vice_captain_id,
    )?;

    let squad_cost: f32 = request
        .player_ids
        .iter()
        .filter_map(|player_id| world.players.get(player_id))
        .map(|player| player.cost)
        .sum();

    Ok((
        StatusCode::CREATED,
        Json(CreateTeamResponse {
            team_id,
            manager_id: request.manager_id,
            team_name: request.team_name,
            gw_code: request.gw_code,
            squad_cost,
        }),
    ))
}
