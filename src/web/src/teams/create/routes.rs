use crate::AppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/fantasy-teams", post(super::team_create_action))
}
