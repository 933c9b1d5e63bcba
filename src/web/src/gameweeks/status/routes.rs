use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/gameweeks/{code}/status", get(super::gameweek_status_action))
}
