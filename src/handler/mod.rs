//! Request handler module
//!
//! Responsible for request routing dispatch and the `/add` operation.

mod add;
mod query;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
