pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use core::TransferRecord;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TransferHistoryRequest {
    pub team_id: u32,
    pub gw_code: String,
}

#[derive(Serialize)]
pub struct TransferHistoryResponse {
    pub team_id: u32,
    pub gw_code: String,
    pub transfers: Vec<TransferRecord>,
}

pub async fn transfer_history_action(
    State(state): State<AppData>,
    Path(route_params): Path<TransferHistoryRequest>,
) -> ApiResult<impl IntoResponse> {
    let world = state.world.read().await;

    let transfers = world.transfer_history(route_params.team_id, &route_params.gw_code)?;

    Ok(Json(TransferHistoryResponse {
        team_id: route_params.team_id,
        gw_code: route_params.gw_code,
        transfers,
    }))
}
