//! Route registration subsystem.
//!
//! # Data Flow
//! ```text
//! AppConfig (version, optimize, cache, asset_dirs, bundles)
//!     → cache.rs (resolve cache durations into a max-age)
//!     → static_assets.rs / i18n.rs (compute binding plans, pure)
//!     → http::server (apply the plans to the Axum router)
//!
//! configure():
//!     optimized-output existence check (blocking, before anything registers)
//!     → compute all plans
//!     → apply all plans
//! ```
//!
//! # Design Decisions
//! - Plans are computed before anything is registered, so a precondition
//!   failure leaves the router untouched (no partial registration)
//! - Same-prefix directories are chained as ordered fallbacks: the first
//!   directory containing a requested file wins
//! - The optimized-output check is a synchronous precondition, not a
//!   background diagnostic

pub mod cache;
pub mod i18n;
pub mod static_assets;

pub use cache::CacheOptions;
pub use i18n::{i18n_redirect_bindings, I18nBundleOpts, RedirectBinding};
pub use static_assets::{static_asset_bindings, StaticAssetOpts, StaticBinding};

use std::path::{Path, PathBuf};

use axum::Router;
use thiserror::Error;

use crate::config::schema::{AppConfig, ResourcesConfig};
use crate::http::server::{apply_redirect_bindings, apply_static_bindings};

/// Errors raised while building route registrations.
#[derive(Debug, Error)]
pub enum RoutesError {
    /// No source directories were supplied.
    #[error("at least one asset directory is required")]
    MissingDirs,

    /// The release version string was empty or missing.
    #[error("resource version must not be empty")]
    MissingVersion,

    /// No i18n bundles were supplied.
    #[error("at least one i18n bundle is required")]
    MissingBundles,

    /// Optimized mode was requested but the build output is absent.
    #[error("optimized resources requested but {0} does not exist; run the dist build first")]
    MissingOptimizedOutput(PathBuf),
}

/// URL base for a versioned resource prefix, e.g. `/resources/15.01`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBase(String);

impl UrlBase {
    /// Production prefix: `/resources/{version}`.
    pub fn production(version: &str) -> Self {
        Self(format!("/resources/{version}"))
    }

    /// Debug prefix: `/resources-debug/{version}`, served uncached from the
    /// source `public` folders.
    pub fn debug(version: &str) -> Self {
        Self(format!("/resources-debug/{version}"))
    }

    /// Append a path segment, normalizing the separator.
    pub fn join(&self, segment: &str) -> String {
        format!("{}/{}", self.0, segment.trim_start_matches('/'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Configure the application to serve static assets and i18n bundles.
///
/// Checks that the optimized build output exists when optimized mode is
/// requested, computes the static-asset and i18n redirect plans, and applies
/// them to the router. All plans are computed before any is applied, so an
/// error never leaves the router partially registered.
///
/// `bundles` may be empty, in which case no redirect is registered.
pub fn configure(
    app: Router,
    config: &AppConfig,
    dirs: &[PathBuf],
    bundles: &[String],
) -> Result<Router, RoutesError> {
    let first_dir = dirs.first().ok_or(RoutesError::MissingDirs)?;
    check_optimized_dir(first_dir, &config.resources)?;

    let static_plan = static_asset_bindings(&StaticAssetOpts {
        dirs,
        version: &config.version,
        optimize: config.resources.optimize,
        cache: config.resources.cache.as_ref(),
    })?;

    let redirect_plan = if bundles.is_empty() {
        Vec::new()
    } else {
        i18n_redirect_bindings(&I18nBundleOpts {
            bundles,
            version: &config.version,
            context_url: &config.context_url,
        })?
    };

    log_source_dirs(dirs);

    let app = apply_static_bindings(app, &static_plan);
    let app = apply_redirect_bindings(app, &redirect_plan);
    Ok(app)
}

/// Fail when optimized mode is requested but the `dist/public` build output
/// is missing. Runs before any route is registered, so the server never
/// starts against stale or absent optimized assets.
pub fn check_optimized_dir(dir: &Path, resources: &ResourcesConfig) -> Result<(), RoutesError> {
    if resources.optimize {
        let dist_dir = dir.join("dist").join("public");
        if !dist_dir.is_dir() {
            return Err(RoutesError::MissingOptimizedOutput(dist_dir));
        }
    } else {
        tracing::warn!("will use non-optimized resources");
    }
    Ok(())
}

/// Best-effort inventory of the source `public` folders for the startup log.
/// Enumeration failures are logged and ignored.
fn log_source_dirs(dirs: &[PathBuf]) {
    for dir in dirs {
        let public_dir = dir.join("public");
        match std::fs::read_dir(&public_dir) {
            Ok(entries) => {
                let count = entries.count();
                tracing::debug!(dir = %public_dir.display(), entries = count, "source asset folder");
            }
            Err(error) => {
                tracing::warn!(dir = %public_dir.display(), %error, "could not list source asset folder");
            }
        }
    }
}
