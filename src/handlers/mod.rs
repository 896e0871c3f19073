//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers (controllers).
//! Each handler processes a specific API endpoint.
//!
//! ## Submodules
//! - `greeting`: Static greeting endpoints
//! - `auth`: Password login
//! - `health`: Health check endpoint (for monitoring)
//!
//! ## Handler Pattern
//! Handlers are async functions that:
//! 1. Extract data from request (path params, JSON body, shared state)
//! 2. Call the gateway
//! 3. Return a response (JSON, status code)

pub mod auth;
pub mod greeting;
pub mod health;
