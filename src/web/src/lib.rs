mod captain;
mod common;
mod error;
mod gameweeks;
mod players;
mod recommendations;
mod routes;
mod scores;
mod standings;
mod teams;
mod transfers;

pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use database::World;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct FantasyServer {
    data: AppData,
}

impl FantasyServer {
    pub fn new(data: AppData) -> Self {
        FantasyServer { data }
    }

    pub async fn run(&self) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], 18000));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:18000");

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            error!("Server stopped unexpectedly, but not crashing the process");
        }
    }
}

/// Shared handler state. The single write lock serializes every
/// mutating operation, so check-then-commit sequences never interleave.
pub struct AppData {
    pub world: Arc<RwLock<World>>,
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            world: Arc::clone(&self.world),
        }
    }
}
