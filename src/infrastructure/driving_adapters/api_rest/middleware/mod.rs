//! API Middleware
//!
//! Authentication and request tagging middleware for the REST API.

pub mod auth;
pub mod request_id;

pub use auth::{CardOwner, Principal};
pub use request_id::RequestId;
