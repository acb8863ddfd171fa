use crate::{GameAppData, MatchdayServer, ResultStore};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use database::DatabaseLoader;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let data = GameAppData::new(DatabaseLoader::load().unwrap(), ResultStore::new(dir.path()));

        TestApp {
            router: MatchdayServer::app(data),
            dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Posts `body` as is, without a content type.
    pub async fn post_plain(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Request::post(uri).body(Body::from(body.to_string())).unwrap()).await
    }

    /// Number of files written under one store directory.
    pub fn stored_files(&self, directory: &str) -> usize {
        std::fs::read_dir(self.dir.path().join(directory))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }
}
