use database::{DatabaseEntity, DatabaseLoader, DatabaseResult};
use engine::TimeEstimation;
use env_logger::Env;
use log::info;
use web::{GameAppData, MatchdayServer, ResultStore, ServerConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    let (database, estimated) = TimeEstimation::estimate(|| load_database(&config));
    let database = database?;

    info!(
        "database loaded: {} teams, {} players in {} ms",
        database.team_ratings.len(),
        database.players().count(),
        estimated
    );

    let data = GameAppData::new(database, ResultStore::new(&config.store_dir));

    MatchdayServer::new(config, data).run().await?;

    Ok(())
}

fn load_database(config: &ServerConfig) -> DatabaseResult<DatabaseEntity> {
    match &config.ratings_path {
        Some(path) => DatabaseLoader::load_from_path(path),
        None => DatabaseLoader::load(),
    }
}
