//! HTTP protocol layer module
//!
//! Response construction shared by the router and the download handler.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_download_response, build_health_response,
    build_read_error_response, READ_ERROR_MESSAGE,
};
