//! HTTP surface of the sync helper.
//!
//! One real endpoint: `POST /sync` with the full image list. `OPTIONS` on
//! any path answers the browser preflight with 204; everything else is 404.
//! Every response carries permissive CORS headers so the dev-server origin
//! can call across ports.

use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use portfolio_site::sync::{SYNC_PATH, SyncResponse};
use portfolio_site::{ImageRecord, assets_module_source};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::publish::{self, PublishError};

#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Repository the git commands run in.
    pub repo_dir: PathBuf,
    /// Assets source file to overwrite, relative to `repo_dir` unless
    /// absolute.
    pub assets_path: PathBuf,
    pub remote: String,
    pub branch: String,
    pub push: bool,
}

#[derive(Debug, Error)]
enum SyncError {
    #[error("invalid image list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

pub fn router(config: SyncConfig) -> Router {
    Router::new()
        .route(SYNC_PATH, post(sync).fallback(fallback))
        .fallback(fallback)
        .layer(middleware::map_response(with_cors_headers))
        .with_state(Arc::new(config))
}

async fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

/// Preflight is answered before path matching: `OPTIONS` on any path gets
/// 204, every other unmatched request gets 404.
async fn fallback(method: Method) -> StatusCode {
    if method == Method::OPTIONS {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn sync(State(config): State<Arc<SyncConfig>>, body: String) -> Response {
    match apply_sync(&config, &body).await {
        Ok(count) => {
            info!("synced {count} records to {}", config.assets_path.display());
            (StatusCode::OK, Json(SyncResponse::ok())).into_response()
        }
        Err(err) => {
            error!("sync failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SyncResponse::failure(err.to_string())),
            )
                .into_response()
        }
    }
}

/// Parse the posted list, rewrite the assets file, and (unless disabled)
/// publish it. Returns the number of records written.
async fn apply_sync(config: &SyncConfig, body: &str) -> Result<usize, SyncError> {
    let images: Vec<ImageRecord> = serde_json::from_str(body)?;
    let source = assets_module_source(&images)?;
    let file = config.repo_dir.join(&config.assets_path);
    publish::write_assets_file(&file, &source).await?;
    if config.push {
        publish::push(
            &config.repo_dir,
            &config.assets_path,
            &config.remote,
            &config.branch,
        )
        .await?;
    }
    Ok(images.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_site::Category;
    use std::net::SocketAddr;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn test_config(dir: &TempDir) -> SyncConfig {
        SyncConfig {
            repo_dir: dir.path().to_path_buf(),
            assets_path: dir.path().join("assets.js"),
            remote: "origin".to_string(),
            branch: "main".to_string(),
            push: false,
        }
    }

    fn sample_body() -> String {
        let images = vec![
            ImageRecord::new("1", "a.png", Category::Portrait),
            ImageRecord::new("2", "b.png", Category::Event),
        ];
        serde_json::to_string(&images).unwrap()
    }

    #[tokio::test]
    async fn sync_writes_the_assets_module() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let count = apply_sync(&config, &sample_body()).await.unwrap();
        assert_eq!(count, 2);

        let written = std::fs::read_to_string(&config.assets_path).unwrap();
        assert!(written.starts_with("export const portfolioAssets = ["));
        assert!(written.contains("a.png"));
        assert!(written.contains("b.png"));
        assert!(written.ends_with("];\n"));
    }

    #[tokio::test]
    async fn malformed_bodies_are_rejected_before_writing() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let result = apply_sync(&config, r#"{"not":"an array"}"#).await;
        assert!(matches!(result, Err(SyncError::Parse(_))));
        assert!(!config.assets_path.exists());
    }

    /// Serve the router on an ephemeral local port.
    async fn spawn_service(config: SyncConfig) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(config)).await.unwrap();
        });
        addr
    }

    /// One raw HTTP/1.1 exchange; returns the full response text.
    async fn exchange(addr: SocketAddr, method: &str, path: &str, body: Option<&str>) -> String {
        let body = body.unwrap_or_default();
        let request = format!(
            "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\
             Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
            body.len(),
        );

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn post_sync_succeeds_through_the_router() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let assets_path = config.assets_path.clone();
        let addr = spawn_service(config).await;

        let response = exchange(addr, "POST", "/sync", Some(&sample_body())).await;
        assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
        assert!(response.contains(r#"{"success":true}"#));
        assert!(response.contains("access-control-allow-origin: *"));
        assert!(assets_path.exists());
    }

    #[tokio::test]
    async fn malformed_post_is_a_structured_500() {
        let dir = TempDir::new().unwrap();
        let addr = spawn_service(test_config(&dir)).await;

        let response = exchange(addr, "POST", "/sync", Some("not json")).await;
        assert!(response.starts_with("HTTP/1.1 500"), "got: {response}");
        assert!(response.contains(r#""success":false"#));
    }

    #[tokio::test]
    async fn options_gets_no_content_on_any_path() {
        let dir = TempDir::new().unwrap();
        let addr = spawn_service(test_config(&dir)).await;

        // Preflight is answered before path matching, like the original.
        for path in ["/sync", "/anything", "/"] {
            let response = exchange(addr, "OPTIONS", path, None).await;
            assert!(
                response.starts_with("HTTP/1.1 204"),
                "OPTIONS {path} got: {response}"
            );
            assert!(response.contains("access-control-allow-origin: *"));
            assert!(response.contains("access-control-allow-methods: POST, OPTIONS"));
        }
    }

    #[tokio::test]
    async fn other_methods_and_paths_are_not_found() {
        let dir = TempDir::new().unwrap();
        let addr = spawn_service(test_config(&dir)).await;

        for (method, path) in [("GET", "/sync"), ("GET", "/"), ("POST", "/other")] {
            let response = exchange(addr, method, path, None).await;
            assert!(
                response.starts_with("HTTP/1.1 404"),
                "{method} {path} got: {response}"
            );
            assert!(response.contains("access-control-allow-origin: *"));
        }
    }
}
