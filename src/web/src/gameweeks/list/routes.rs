use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/gameweeks", get(super::gameweek_list_action))
}
