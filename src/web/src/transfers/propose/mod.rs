pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TransferRequest {
    pub team_id: u32,
    pub gw_code: String,
    pub player_out_id: u32,
    pub player_in_id: u32,
}

#[derive(Serialize)]
pub struct TransferResponse {
    pub team_id: u32,
    pub gw_code: String,
    pub sequence_no: u8,
    pub player_out_id: u32,
    pub player_in_id: u32,
    pub new_squad_cost: f32,
    /// The outgoing player held the armband; a re-selection is needed.
    pub cleared_captain: bool,
    pub cleared_vice_captain: bool,
    pub transfers_remaining: usize,
}

pub async fn transfer_propose_action(
    State(state): State<AppData>,
    Json(request): Json<TransferRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut world = state.world.write().await;

    let outcome = world.propose_transfer(
        request.team_id,
        &request.gw_code,
        request.player_out_id,
        request.player_in_id,
    )?;

    Ok(Json(TransferResponse {
        team_id: request.team_id,
        gw_code: request.gw_code,
        sequence_no: outcome.record.sequence_no,
        player_out_id: outcome.record.player_out_id,
        player_in_id: outcome.record.player_in_id,
        new_squad_cost: outcome.new_squad_cost,
        cleared_captain: outcome.cleared_captain,
        cleared_vice_captain: outcome.cleared_vice_captain,
        transfers_remaining: outcome.remaining_after,
    }))
}
