//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Only the URI path is consulted;
//! any method is accepted.

use crate::config::AppState;
use crate::handler::download;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(route_request(req.uri().path(), &state).await)
}

/// Route request based on path and configuration
async fn route_request(path: &str, state: &AppState) -> Response<Full<Bytes>> {
    // Health check endpoints first, always fast
    if state.config.routes.health.claims(path) {
        return http::build_health_response("ok");
    }

    if let Some(target) = state.downloads.get(path) {
        return download::serve_download(target).await;
    }

    logger::log_debug(&format!("No route for {path}"));
    http::build_404_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::Method;

    const PLUGIN: &[u8] = b"//=== JOMY_Core.js ===\n(function() {})();\n";

    fn state_for(dir: &std::path::Path) -> Arc<AppState> {
        let config = Config::from_toml(&format!(
            r#"
            [logging]
            level = "error"

            [downloads]
            root = '{}'

            [[downloads.routes]]
            path = "/download/core"
            file = "JOMY_Core.js"
            filename = "JOMY_Core.js"

            [[downloads.routes]]
            path = "/download/missing"
            file = "JOMY_Missing.js"
            "#,
            dir.display()
        ))
        .unwrap();
        Arc::new(AppState::new(&config))
    }

    fn fixture() -> (tempfile::TempDir, Arc<AppState>) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("JOMY_Core.js"), PLUGIN).unwrap();
        let state = state_for(dir.path());
        (dir, state)
    }

    async fn send(state: &Arc<AppState>, req: Request<String>) -> (u16, hyper::HeaderMap, Bytes) {
        let resp = handle_request(req, Arc::clone(state)).await.unwrap();
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, headers, body)
    }

    fn get(path: &str) -> Request<String> {
        Request::builder().uri(path).body(String::new()).unwrap()
    }

    #[tokio::test]
    async fn test_download_route() {
        let (_dir, state) = fixture();
        let (status, headers, body) = send(&state, get("/download/core")).await;

        assert_eq!(status, 200);
        assert_eq!(headers["content-type"], "application/octet-stream");
        assert_eq!(headers["content-disposition"], "attachment; filename=\"JOMY_Core.js\"");
        assert_eq!(body, PLUGIN);
    }

    #[tokio::test]
    async fn test_missing_file_route() {
        let (_dir, state) = fixture();
        let (status, headers, body) = send(&state, get("/download/missing")).await;

        assert_eq!(status, 500);
        assert_ne!(headers["content-type"], "application/octet-stream");
        assert!(headers.get("content-disposition").is_none());
        assert_eq!(body, http::READ_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_request_details_are_ignored() {
        let (_dir, state) = fixture();
        let (_, baseline_headers, baseline) = send(&state, get("/download/core")).await;

        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH, Method::HEAD] {
            let req = Request::builder()
                .method(method.clone())
                .uri("/download/core?ignored=true")
                .header("Accept", "text/html")
                .header("Range", "bytes=0-3")
                .header("If-None-Match", "\"anything\"")
                .body("request body that nobody reads".to_string())
                .unwrap();
            let (status, headers, body) = send(&state, req).await;
            assert_eq!(status, 200, "{method}");
            assert_eq!(headers, baseline_headers, "{method}");
            assert_eq!(body, baseline, "{method}");
        }
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let (_dir, state) = fixture();
        for path in ["/", "/download", "/download/core/", "/download/JOMY_Core.js"] {
            let (status, _, body) = send(&state, get(path)).await;
            assert_eq!(status, 404, "{path}");
            assert_eq!(body, "404 Not Found");
        }
    }

    #[tokio::test]
    async fn test_health_probes() {
        let (_dir, state) = fixture();
        for path in ["/healthz", "/readyz"] {
            let (status, _, body) = send(&state, get(path)).await;
            assert_eq!(status, 200, "{path}");
            assert_eq!(body, "ok");
        }
    }

    #[tokio::test]
    async fn test_concurrent_requests() {
        let (_dir, state) = fixture();

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let path = if i % 4 == 0 { "/download/missing" } else { "/download/core" };
                    let req = Request::builder().uri(path).body(String::new()).unwrap();
                    (path, send(&state, req).await)
                })
            })
            .collect();

        for task in tasks {
            let (path, (status, _, body)) = task.await.unwrap();
            if path == "/download/core" {
                assert_eq!(status, 200);
                assert_eq!(body, PLUGIN);
            } else {
                assert_eq!(status, 500);
                assert_eq!(body, http::READ_ERROR_MESSAGE);
            }
        }
    }
}
