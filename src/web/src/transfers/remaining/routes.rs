use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/transfers/{team_id}/{gw_code}/remaining",
        get(super::transfers_remaining_action),
    )
}
