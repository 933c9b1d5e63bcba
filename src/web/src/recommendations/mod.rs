pub mod buy;
pub mod sell;

use crate::AppData;
use axum::Router;

pub fn recommendation_routes() -> Router<AppData> {
    Router::new()
        .merge(buy::routes::routes())
        .merge(sell::routes::routes())
}
