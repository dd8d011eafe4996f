//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! Binding plans (routes subsystem)
//!     → server.rs (apply to Axum router: ServeDir chains, redirects)
//!     → middleware (request tracing, timeouts)
//!     → axum::serve on the bound listener
//! ```
//!
//! File transfer itself (range requests, conditional headers, 404 on miss)
//! is delegated to `tower_http::services::ServeDir`; this subsystem only
//! wires prefixes to directories.

pub mod server;

pub use server::HttpServer;
