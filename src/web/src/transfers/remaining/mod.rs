pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use core::WEEKLY_TRANSFER_CAP;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TransfersRemainingRequest {
    pub team_id: u32,
    pub gw_code: String,
}

#[derive(Serialize)]
pub struct TransfersRemainingResponse {
    pub team_id: u32,
    pub gw_code: String,
    pub used: usize,
    pub remaining: usize,
    pub cap: usize,
}

pub async fn transfers_remaining_action(
    State(state): State<AppData>,
    Path(route_params): Path<TransfersRemainingRequest>,
) -> ApiResult<impl IntoResponse> {
    let world = state.world.read().await;

    let remaining = world.transfers_remaining(route_params.team_id, &route_params.gw_code)?;

    Ok(Json(TransfersRemainingResponse {
        team_id: route_params.team_id,
        gw_code: route_params.gw_code,
        used: WEEKLY_TRANSFER_CAP - remaining,
        remaining,
        cap: WEEKLY_TRANSFER_CAP,
    }))
}
