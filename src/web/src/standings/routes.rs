use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/standings/{gw_code}", get(super::standings_get_action))
}
