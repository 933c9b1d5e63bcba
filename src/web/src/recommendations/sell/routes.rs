use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/sell-suggestions/{team_id}/{gw_code}",
        get(super::sell_suggestions_action),
    )
}
