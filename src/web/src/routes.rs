use crate::captain::captain_routes;
use crate::common::default_handler::default_handler;
use crate::gameweeks::gameweek_routes;
use crate::players::player_routes;
use crate::recommendations::recommendation_routes;
use crate::scores::score_routes;
use crate::standings::standings_routes;
use crate::teams::team_routes;
use crate::transfers::transfer_routes;
use crate::AppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(team_routes())
            .merge(transfer_routes())
            .merge(captain_routes())
            .merge(score_routes())
            .merge(standings_routes())
            .merge(recommendation_routes())
            .merge(player_routes())
            .merge(gameweek_routes())
            .fallback(default_handler)
    }
}
