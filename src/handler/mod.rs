//! Request handler module
//!
//! Responsible for request routing dispatch and the file download handler.

pub mod download;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
