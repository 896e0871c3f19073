//! # Middleware Module
//!
//! Middleware intercepts HTTP requests and responses.
//! Used for cross-cutting concerns like request correlation, logging, CORS, etc.
//!
//! ## Our Middleware
//! - `request_id`: Tags each request with a UUID and a tracing span
//!
//! CORS and HTTP tracing come straight from `tower_http` (see `app.rs`).

pub mod request_id;
