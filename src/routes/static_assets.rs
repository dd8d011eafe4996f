//! Static-asset binding plans.
//!
//! Computes which URL prefix serves which directory, under which cache
//! options. Registration of the plan lives in [`crate::http::server`]; the
//! plan itself is pure so tests can assert on it directly.

use std::path::PathBuf;

use crate::config::schema::CacheConfig;

use super::{CacheOptions, RoutesError, UrlBase};

/// Options for [`static_asset_bindings`].
#[derive(Debug, Clone)]
pub struct StaticAssetOpts<'a> {
    /// Source directories, each containing a `public` folder to serve. The
    /// first entry is also the parent of the optimized `dist/public` output.
    pub dirs: &'a [PathBuf],

    /// Release version, used to compute the URL of all static resources
    /// (e.g. "15.01").
    pub version: &'a str,

    /// If true, serve the single merged `dist/public` output instead of the
    /// per-source `public` folders.
    pub optimize: bool,

    /// Configured cache durations; `None` disables caching.
    pub cache: Option<&'a CacheConfig>,
}

/// One URL-prefix-to-directory registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBinding {
    /// URL prefix the directory is mounted under (e.g. "/resources/15.01").
    pub url_prefix: String,

    /// Directory the files are served from.
    pub dir: PathBuf,

    /// Cache options handed to the static-file service.
    pub cache: CacheOptions,
}

/// Compute the static-asset binding plan.
///
/// Bindings sharing a prefix are emitted in `dirs` order and registered as an
/// ordered fallback chain, so the first directory containing a requested file
/// wins.
///
/// In optimized mode the production prefix serves the merged `dist/public`
/// output, while the debug prefix still exposes every source `public` folder
/// uncached for live development. The `css` subtree of the debug prefix is
/// the one exception: the stylesheet bundle is always rebuilt into dist, so
/// it is served from the optimized output even under the debug prefix.
pub fn static_asset_bindings(
    opts: &StaticAssetOpts<'_>,
) -> Result<Vec<StaticBinding>, RoutesError> {
    if opts.dirs.is_empty() {
        return Err(RoutesError::MissingDirs);
    }
    if opts.version.is_empty() {
        return Err(RoutesError::MissingVersion);
    }

    let base = UrlBase::production(opts.version);
    let debug_base = UrlBase::debug(opts.version);
    let cache = CacheOptions::resolve(opts.cache);

    tracing::debug!(max_age_ms = cache.max_age_ms, prefix = %base.as_str(), "computing static bindings");

    let mut bindings = Vec::new();
    if opts.optimize {
        let dist_dir = opts.dirs[0].join("dist").join("public");
        tracing::debug!(dir = %dist_dir.display(), "serving optimized resources");
        bindings.push(StaticBinding {
            url_prefix: base.as_str().to_string(),
            dir: dist_dir.clone(),
            cache,
        });

        for dir in opts.dirs {
            let public_dir = dir.join("public");
            tracing::debug!(dir = %public_dir.display(), "serving source resources under debug prefix");
            bindings.push(StaticBinding {
                url_prefix: debug_base.as_str().to_string(),
                dir: public_dir,
                cache: CacheOptions::UNCACHED,
            });
        }

        bindings.push(StaticBinding {
            url_prefix: debug_base.join("css"),
            dir: dist_dir.join("css"),
            cache,
        });
    } else {
        for dir in opts.dirs {
            let public_dir = dir.join("public");
            tracing::debug!(dir = %public_dir.display(), "serving source resources");
            bindings.push(StaticBinding {
                url_prefix: base.as_str().to_string(),
                dir: public_dir,
                cache,
            });
        }
    }

    Ok(bindings)
}
