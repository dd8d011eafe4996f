//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the resource
//! server. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the resource server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Release version of the web application; part of every resource URL
    /// (e.g. "15.01").
    pub version: String,

    /// Base of all *other* URLs, prepended to redirect targets
    /// (e.g. "/portal", or "" when the application is mounted at the root).
    pub context_url: String,

    /// Source directories, each containing a `public` folder to serve. The
    /// first entry is also the parent of the optimized `dist/public` output.
    pub asset_dirs: Vec<PathBuf>,

    /// i18n bundle names served under `{prefix}/i18n/` (e.g. "PortalMessages").
    pub bundles: Vec<String>,

    /// Resource layout mode and caching.
    pub resources: ResourcesConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Resource serving configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ResourcesConfig {
    /// If true, all resources are served from the single merged
    /// `dist/public` build output instead of the per-source `public` folders.
    pub optimize: bool,

    /// Cache durations for served assets. Absent means no caching.
    pub cache: Option<CacheConfig>,
}

/// Cache durations for served assets.
///
/// At most one of the two fields is meaningful; when both are set, `ms`
/// wins over the `seconds`-derived value.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache lifetime in milliseconds.
    pub ms: Option<u64>,

    /// Cache lifetime in seconds.
    pub seconds: Option<u64>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}
