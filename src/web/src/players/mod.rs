pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use core::Position;
use serde::{Deserialize, Serialize};

const DEFAULT_LIST_LIMIT: usize = 50;

#[derive(Deserialize)]
pub struct PlayerListQuery {
    pub club: Option<String>,
    pub position: Option<String>,
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct PlayerDto {
    pub id: u32,
    pub name: String,
    pub club_code: String,
    pub position: Position,
    pub cost: f32,
    pub total_points: i32,
}

#[derive(Serialize)]
pub struct PlayerListResponse {
    pub players: Vec<PlayerDto>,
}

pub async fn player_list_action(
    State(state): State<AppData>,
    Query(query): Query<PlayerListQuery>,
) -> ApiResult<impl IntoResponse> {
    let position = query
        .position
        .as_deref()
        .map(|raw| raw.parse::<Position>())
        .transpose()
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let world = state.world.read().await;

    let players = world
        .search_players(
            query.club.as_deref(),
            position,
            query.q.as_deref(),
            query.limit.unwrap_or(DEFAULT_LIST_LIMIT),
        )
        .into_iter()
        .map(|player| PlayerDto {
            id: player.id,
            name: player.full_name.to_string(),
            club_code: player.club_code.clone(),
            position: player.position,
            cost: player.cost,
            total_points: player.total_points,
        })
        .collect();

    Ok(Json(PlayerListResponse { players }))
}

pub fn player_routes() -> axum::Router<AppData> {
    routes::routes()
}
