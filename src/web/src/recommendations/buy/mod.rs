pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use core::{BuyRecommendation, Position};
use serde::{Deserialize, Serialize};

const DEFAULT_BUY_LIMIT: usize = 10;

#[derive(Deserialize)]
pub struct BuyRecommendationsRequest {
    pub team_id: u32,
    pub gw_code: String,
}

#[derive(Deserialize)]
pub struct BuyRecommendationsQuery {
    pub position: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct BuyRecommendationsResponse {
    pub team_id: u32,
    pub gw_code: String,
    pub recommendations: Vec<BuyRecommendation>,
}

pub async fn recommendations_buy_action(
    State(state): State<AppData>,
    Path(route_params): Path<BuyRecommendationsRequest>,
    Query(query): Query<BuyRecommendationsQuery>,
) -> ApiResult<impl IntoResponse> {
    let position = query
        .position
        .as_deref()
        .map(|raw| raw.parse::<Position>())
        .transpose()
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let world = state.world.read().await;

    let recommendations = world.buy_recommendations(
        route_params.team_id,
        &route_params.gw_code,
        position,
        query.limit.unwrap_or(DEFAULT_BUY_LIMIT),
    )?;

    Ok(Json(BuyRecommendationsResponse {
        team_id: route_params.team_id,
        gw_code: route_params.gw_code,
        recommendations,
    }))
}
