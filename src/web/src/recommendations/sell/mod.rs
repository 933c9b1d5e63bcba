pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use core::SellRecommendation;
use serde::{Deserialize, Serialize};

const DEFAULT_SELL_LIMIT: usize = 5;

#[derive(Deserialize)]
pub struct SellSuggestionsRequest {
    pub team_id: u32,
    pub gw_code: String,
}

#[derive(Deserialize)]
pub struct SellSuggestionsQuery {
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct SellSuggestionsResponse {
    pub team_id: u32,
    pub gw_code: String,
    pub suggestions: Vec<SellRecommendation>,
}

pub async fn sell_suggestions_action(
    State(state): State<AppData>,
    Path(route_params): Path<SellSuggestionsRequest>,
    Query(query): Query<SellSuggestionsQuery>,
) -> ApiResult<impl IntoResponse> {
    let world = state.world.read().await;

    let suggestions = world.sell_suggestions(
        route_params.team_id,
        &route_params.gw_code,
        query.limit.unwrap_or(DEFAULT_SELL_LIMIT),
    )?;

    Ok(Json(SellSuggestionsResponse {
        team_id: route_params.team_id,
        gw_code: route_params.gw_code,
        suggestions,
    }))
}
