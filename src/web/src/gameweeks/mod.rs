pub mod list;
pub mod results;
pub mod status;

use crate::AppData;
use axum::Router;

pub fn gameweek_routes() -> Router<AppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(status::routes::routes())
        .merge(results::routes::routes())
}
