pub mod history;
pub mod propose;
pub mod remaining;

use crate::AppData;
use axum::Router;

pub fn transfer_routes() -> Router<AppData> {
    Router::new()
        .merge(propose::routes::routes())
        .merge(history::routes::routes())
        .merge(remaining::routes::routes())
}
