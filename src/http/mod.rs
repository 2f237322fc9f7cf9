//! HTTP protocol layer module
//!
//! Response construction and conditional GET, decoupled from the arithmetic.

pub mod cache;
pub mod response;

// Re-export commonly used builders
pub use response::{apply_powered_by, build_404_response, build_json_response};
