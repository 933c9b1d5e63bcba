use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/fantasy-teams/{team_id}/lineup/{gw_code}",
        get(super::team_lineup_action),
    )
}
