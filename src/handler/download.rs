//! File download handler
//!
//! Reads a configured file in full and sends it as an octet-stream. The
//! request itself is never inspected: method, headers and body have no
//! bearing on the response.

use crate::config::DownloadTarget;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::fmt;
use std::io;
use std::path::Path;
use tokio::fs;

/// Why a download target could not be read.
///
/// The distinction only reaches the error log; clients always get the same
/// 500 response.
#[derive(Debug)]
pub enum FileReadError {
    NotFound(io::Error),
    PermissionDenied(io::Error),
    Io(io::Error),
}

impl From<io::Error> for FileReadError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(err),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(err),
            _ => Self::Io(err),
        }
    }
}

impl fmt::Display for FileReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(e) => write!(f, "file not found: {e}"),
            Self::PermissionDenied(e) => write!(f, "permission denied: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for FileReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(e) | Self::PermissionDenied(e) | Self::Io(e) => Some(e),
        }
    }
}

/// Read the whole file into memory
pub async fn read_payload(path: &Path) -> Result<Vec<u8>, FileReadError> {
    Ok(fs::read(path).await?)
}

/// Serve a download target
pub async fn serve_download(target: &DownloadTarget) -> Response<Full<Bytes>> {
    match read_payload(&target.file).await {
        Ok(data) => {
            logger::log_debug(&format!(
                "Sending {} ({} bytes)",
                target.file.display(),
                data.len()
            ));
            http::build_download_response(data, target.filename.as_deref())
        }
        Err(e) => {
            logger::log_read_failure(&target.file, &e);
            http::build_read_error_response()
        }
    }
}
