use fantasy_core::utils::TimeEstimation;
use database::{SeedDatabase, WorldGenerator};
use env_logger::Env;
use log::info;
use std::sync::Arc;
use tokio::sync::RwLock;
use web::{AppData, FantasyServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Ok(host) = hostname::get() {
        info!("starting on host: {}", host.to_string_lossy());
    }

    let (seed, estimated) = TimeEstimation::estimate(SeedDatabase::load);

    info!("seed data loaded: {} ms", estimated);

    let world = WorldGenerator::generate(&seed);

    info!(
        "world ready: {} clubs, {} players, {} gameweeks",
        world.clubs.len(),
        world.players.len(),
        world.gameweeks.len()
    );

    let data = AppData {
        world: Arc::new(RwLock::new(world)),
    };

    FantasyServer::new(data).run().await;
}
