//! Plugin download server
//!
//! Serves configured files from local disk as `application/octet-stream`
//! downloads over HTTP/1.1.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
