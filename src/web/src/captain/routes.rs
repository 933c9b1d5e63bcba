use crate::AppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/captain", post(super::captain_set_action))
}
