pub mod create;
pub mod lineup;

use crate::AppData;
use axum::Router;

pub fn team_routes() -> Router<AppData> {
    Router::new()
        .merge(create::routes::routes())
        .merge(lineup::routes::routes())
}
