pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CaptainRequest {
    pub team_id: u32,
    pub gw_code: String,
    pub captain_id: u32,
    pub vice_captain_id: u32,
}

#[derive(Serialize)]
pub struct CaptainResponse {
    pub team_id: u32,
    pub gw_code: String,
    pub captain_id: u32,
    pub vice_captain_id: u32,
}

pub async fn captain_set_action(
    State(state): State<AppData>,
    Json(request): Json<CaptainRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut world = state.world.write().await;

    world.set_captains(
        request.team_id,
        &request.gw_code,
        request.captain_id,
        request.vice_captain_id,
    )?;

    Ok(Json(CaptainResponse {
        team_id: request.team_id,
        gw_code: request.gw_code,
        captain_id: request.captain_id,
        vice_captain_id: request.vice_captain_id,
    }))
}

pub fn captain_routes() -> axum::Router<AppData> {
    routes::routes()
}
