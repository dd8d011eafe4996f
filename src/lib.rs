//! Versioned static-resource server library.
//!
//! Serves web assets (scripts, styles, images) and locale resource bundles
//! under version-scoped URL prefixes, from either a single optimized
//! `dist/public` build output or the per-source `public` folders used during
//! live development.
//!
//! ```text
//! AppConfig (version, optimize, cache, dirs, bundles)
//!     → routes (binding plans: prefix → directory / redirect)
//!     → http (apply plans to the Axum router, serve)
//! ```

pub mod config;
pub mod http;
pub mod routes;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use routes::RoutesError;
