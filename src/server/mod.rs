//! Optional host for the SPA.
//!
//! Serves the client bundle through `dioxus::serve` and forwards every
//! `/api/v1` request to the grading backend, so the client can talk to the
//! API on its own origin.
//!
//! - **Configuration** (`config`) - Backend URL read from the environment
//! - **State** (`state`) - Shared HTTP client and backend URL
//! - **Startup** (`startup`) - HTTP client and CORS setup
//! - **Router** (`router`) - Axum route table
//! - **Controller** (`controller/`) - The forwarding handler
//! - **Error** (`error/`) - Error types and their HTTP responses
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod startup;
pub mod state;
