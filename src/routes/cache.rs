//! Cache option resolution for served assets.

use axum::http::HeaderValue;

use crate::config::schema::CacheConfig;

/// Resolved caching directives for a static binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Cache lifetime handed to the static-file service, in milliseconds.
    pub max_age_ms: u64,
}

impl CacheOptions {
    /// No caching at all; used for every debug-prefix binding.
    pub const UNCACHED: Self = Self { max_age_ms: 0 };

    /// Resolve configured cache durations into a single max-age.
    ///
    /// `seconds` is converted to milliseconds; an explicit `ms` value wins
    /// when both are set. Absent configuration disables caching.
    pub fn resolve(cache: Option<&CacheConfig>) -> Self {
        let mut max_age_ms = 0;
        if let Some(cache) = cache {
            if let Some(seconds) = cache.seconds {
                max_age_ms = seconds * 1000;
            }
            if let Some(ms) = cache.ms {
                max_age_ms = ms;
            }
        }
        Self { max_age_ms }
    }

    /// `Cache-Control` value attached to responses served under this binding.
    pub fn cache_control(&self) -> HeaderValue {
        HeaderValue::from_str(&format!("public, max-age={}", self.max_age_ms / 1000))
            .expect("formatted max-age is a valid header value")
    }
}
