pub mod routes;

use crate::AppData;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use core::Gameweek;
use serde::Serialize;

#[derive(Serialize)]
pub struct GameweekListResponse {
    pub gameweeks: Vec<Gameweek>,
}

pub async fn gameweek_list_action(State(state): State<AppData>) -> impl IntoResponse {
    let world = state.world.read().await;

    Json(GameweekListResponse {
        gameweeks: world.gameweeks.clone(),
    })
}
