pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct GameweekStatusRequest {
    pub code: String,
}

#[derive(Serialize)]
pub struct GameweekStatusResponse {
    pub code: String,
    pub number: u8,
    pub start_date: NaiveDate,
    pub simulated: bool,
    pub transfers_open: bool,
    pub window_open: bool,
    pub fixtures: Vec<FixtureDto>,
}

#[derive(Serialize)]
pub struct FixtureDto {
    pub home_club: String,
    pub away_club: String,
    pub played: bool,
}

pub async fn gameweek_status_action(
    State(state): State<AppData>,
    Path(route_params): Path<GameweekStatusRequest>,
) -> ApiResult<impl IntoResponse> {
    let world = state.world.read().await;

    let gameweek = world.gameweek(&route_params.code)?;

    let fixtures = world
        .fixtures
        .iter()
        .filter(|f| f.gw_code == gameweek.code)
        .map(|f| FixtureDto {
            home_club: f.home_club.clone(),
            away_club: f.away_club.clone(),
            played: f.played,
        })
        .collect();

    Ok(Json(GameweekStatusResponse {
        code: gameweek.code.clone(),
        number: gameweek.number,
        start_date: gameweek.start_date,
        simulated: gameweek.simulated,
        transfers_open: gameweek.transfers_open,
        window_open: gameweek.is_window_open(),
        fixtures,
    }))
}
