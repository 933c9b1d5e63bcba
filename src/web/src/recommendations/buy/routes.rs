use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/recommendations/{team_id}/{gw_code}",
        get(super::recommendations_buy_action),
    )
}
