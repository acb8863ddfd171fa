mod config;
mod error;
mod leagues;
mod r#match;
mod routes;
mod squad;
mod stores;
mod teams;

#[cfg(test)]
mod testing;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use stores::ResultStore;

use crate::routes::ServerRoutes;
use axum::Router;
use axum::response::IntoResponse;
use database::DatabaseEntity;
use log::{error, info};
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct MatchdayServer {
    config: ServerConfig,
    data: GameAppData,
}

impl MatchdayServer {
    pub fn new(config: ServerConfig, data: GameAppData) -> Self {
        MatchdayServer { config, data }
    }

    pub fn app(data: GameAppData) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("handler panicked".to_string()).into_response()
                    })),
            )
            .with_state(data)
    }

    pub async fn run(&self) -> io::Result<()> {
        let app = Self::app(self.data.clone());

        let addr = self.config.address();

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
            e
        })?;

        info!("listen at: http://{}", addr);

        axum::serve(listener, app).await.map_err(|e| {
            error!("Server error: {}", e);
            e
        })
    }
}

pub struct GameAppData {
    pub database: Arc<DatabaseEntity>,
    pub store: Arc<ResultStore>,
}

impl GameAppData {
    pub fn new(database: DatabaseEntity, store: ResultStore) -> Self {
        GameAppData {
            database: Arc::new(database),
            store: Arc::new(store),
        }
    }
}

impl Clone for GameAppData {
    fn clone(&self) -> Self {
        GameAppData {
            database: Arc::clone(&self.database),
            store: Arc::clone(&self.store),
        }
    }
}
