use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/scores/{team_id}/{gw_code}", get(super::score_get_action))
}
