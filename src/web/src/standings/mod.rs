pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use database::StandingEntry;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct StandingsRequest {
    pub gw_code: String,
}

/// The table is empty until the gameweek has results; a pending week is
/// flagged rather than shown as an all-zero table.
#[derive(Serialize)]
pub struct StandingsResponse {
    pub gw_code: String,
    pub simulated: bool,
    pub standings: Vec<StandingEntry>,
}

pub async fn standings_get_action(
    State(state): State<AppData>,
    Path(route_params): Path<StandingsRequest>,
) -> ApiResult<impl IntoResponse> {
    let world = state.world.read().await;

    let table = world.standings(&route_params.gw_code)?;

    Ok(Json(StandingsResponse {
        gw_code: route_params.gw_code,
        simulated: table.is_some(),
        standings: table.unwrap_or_default(),
    }))
}

pub fn standings_routes() -> axum::Router<AppData> {
    routes::routes()
}
