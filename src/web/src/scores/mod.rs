pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use core::TeamScore;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub team_id: u32,
    pub gw_code: String,
}

/// `score` is absent until the gameweek has results; a pending week is
/// never reported as zero points.
#[derive(Serialize)]
pub struct ScoreResponse {
    pub team_id: u32,
    pub gw_code: String,
    pub simulated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<TeamScore>,
}

pub async fn score_get_action(
    State(state): State<AppData>,
    Path(route_params): Path<ScoreRequest>,
) -> ApiResult<impl IntoResponse> {
    let world = state.world.read().await;

    let score = world.team_score(route_params.team_id, &route_params.gw_code)?;

    Ok(Json(ScoreResponse {
        team_id: route_params.team_id,
        gw_code: route_params.gw_code,
        simulated: score.is_some(),
        score,
    }))
}

pub fn score_routes() -> axum::Router<AppData> {
    routes::routes()
}
