use crate::AppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/transfers", post(super::transfer_propose_action))
}
