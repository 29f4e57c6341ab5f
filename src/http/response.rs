//! HTTP response building module
//!
//! Provides builders for each response the server sends, decoupled from
//! routing and file access.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Body of every failed download, whatever the underlying cause
pub const READ_ERROR_MESSAGE: &str = "Couldn't read files on the server";

/// Build 200 download response carrying the file bytes
///
/// Headers are set before the status line is produced, so `Content-Type`
/// always reaches the client.
pub fn build_download_response(data: Vec<u8>, filename: Option<&str>) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", "application/octet-stream")
        .header("Content-Length", content_length);

    if let Some(name) = filename {
        builder = builder.header("Content-Disposition", format!("attachment; filename=\"{name}\""));
    }

    builder.body(Full::new(Bytes::from(data))).unwrap_or_else(|e| {
        log_build_error("200", &e);
        build_read_error_response()
    })
}

/// Build 500 response for a download whose file could not be read
pub fn build_read_error_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("X-Content-Type-Options", "nosniff")
        .body(Full::new(Bytes::from_static(READ_ERROR_MESSAGE.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            let mut resp = Response::new(Full::new(Bytes::from_static(
                READ_ERROR_MESSAGE.as_bytes(),
            )));
            *resp.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
            resp
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build health probe response
pub fn build_health_response(status: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain")
        .header("Cache-Control", "no-store")
        .body(Full::new(Bytes::from_static(status.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(Full::new(Bytes::from_static(status.as_bytes())))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
