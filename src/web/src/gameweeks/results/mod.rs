pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ResultsRequest {
    pub code: String,
}

#[derive(Deserialize)]
pub struct ResultsBody {
    pub results: Vec<PlayerResultDto>,
}

#[derive(Deserialize)]
pub struct PlayerResultDto {
    pub player_id: u32,
    pub points: i32,
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub gw_code: String,
    pub recorded: usize,
}

pub async fn gameweek_results_action(
    State(state): State<AppData>,
    Path(route_params): Path<ResultsRequest>,
    Json(body): Json<ResultsBody>,
) -> ApiResult<impl IntoResponse> {
    let results: Vec<(u32, i32)> = body
        .results
        .iter()
        .map(|entry| (entry.player_id, entry.points))
        .collect();

    let mut world = state.world.write().await;

    let recorded = world.ingest_results(&route_params.code, &results)?;

    Ok(Json(ResultsResponse {
        gw_code: route_params.code,
        recorded,
    }))
}
