use crate::AppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/gameweeks/{code}/results",
        post(super::gameweek_results_action),
    )
}
