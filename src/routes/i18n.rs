//! Locale-bundle redirect plans.
//!
//! Client-side code unconditionally requests an `_en`-suffixed bundle (e.g.
//! `PortalMessages_en.properties`) when no locale is set. The locale-less
//! file is the one that exists on disk, so the `_en` URL is redirected to it
//! instead of duplicating the file. Redirects are registered under both the
//! production and the debug prefix.

use super::{RoutesError, UrlBase};

/// Options for [`i18n_redirect_bindings`].
#[derive(Debug, Clone)]
pub struct I18nBundleOpts<'a> {
    /// Bundle names to serve (e.g. ["PortalMessages"]).
    pub bundles: &'a [String],

    /// Release version, used to compute the URL of all static resources.
    pub version: &'a str,

    /// Base of all *other* URLs, prepended to redirect targets (e.g. "/portal").
    pub context_url: &'a str,
}

/// One redirect registration: a request path and its redirect target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectBinding {
    pub path: String,
    pub target: String,
}

/// Compute the i18n redirect plan: one binding per bundle per URL base.
pub fn i18n_redirect_bindings(
    opts: &I18nBundleOpts<'_>,
) -> Result<Vec<RedirectBinding>, RoutesError> {
    if opts.bundles.is_empty() {
        return Err(RoutesError::MissingBundles);
    }
    if opts.version.is_empty() {
        return Err(RoutesError::MissingVersion);
    }

    // A context_url of "/" means the application root; avoid a double slash.
    let context_url = opts.context_url.trim_end_matches('/');

    let bases = [
        UrlBase::production(opts.version),
        UrlBase::debug(opts.version),
    ];

    let mut bindings = Vec::new();
    for base in &bases {
        for bundle in opts.bundles {
            let path = base.join(&format!("i18n/{bundle}_en.properties"));
            let target = format!(
                "{context_url}{}",
                base.join(&format!("i18n/{bundle}.properties"))
            );
            bindings.push(RedirectBinding { path, target });
        }
    }

    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundles() -> Vec<String> {
        vec!["Portal".to_string(), "Error".to_string()]
    }

    #[test]
    fn registers_both_prefixes_per_bundle() {
        let bindings = i18n_redirect_bindings(&I18nBundleOpts {
            bundles: &bundles(),
            version: "1.0",
            context_url: "/portal",
        })
        .unwrap();

        assert_eq!(bindings.len(), 4);
        assert_eq!(
            bindings[0],
            RedirectBinding {
                path: "/resources/1.0/i18n/Portal_en.properties".to_string(),
                target: "/portal/resources/1.0/i18n/Portal.properties".to_string(),
            }
        );
        assert_eq!(
            bindings[1].path,
            "/resources/1.0/i18n/Error_en.properties"
        );
        assert_eq!(
            bindings[2],
            RedirectBinding {
                path: "/resources-debug/1.0/i18n/Portal_en.properties".to_string(),
                target: "/portal/resources-debug/1.0/i18n/Portal.properties".to_string(),
            }
        );
    }

    #[test]
    fn root_context_url_does_not_double_the_slash() {
        let bundles = vec!["Portal".to_string()];
        let bindings = i18n_redirect_bindings(&I18nBundleOpts {
            bundles: &bundles,
            version: "1.0",
            context_url: "/",
        })
        .unwrap();

        assert_eq!(
            bindings[0].target,
            "/resources/1.0/i18n/Portal.properties"
        );
    }

    #[test]
    fn missing_bundles_is_a_precondition_error() {
        let err = i18n_redirect_bindings(&I18nBundleOpts {
            bundles: &[],
            version: "1.0",
            context_url: "",
        })
        .unwrap_err();
        assert!(matches!(err, RoutesError::MissingBundles));
    }

    #[test]
    fn empty_version_is_a_precondition_error() {
        let err = i18n_redirect_bindings(&I18nBundleOpts {
            bundles: &bundles(),
            version: "",
            context_url: "",
        })
        .unwrap_err();
        assert!(matches!(err, RoutesError::MissingVersion));
    }
}
