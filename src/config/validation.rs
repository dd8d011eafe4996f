//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check required values are present (version, asset directories)
//! - Validate the bind address shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem found in a parsed configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("version must not be empty")]
    EmptyVersion,

    #[error("asset_dirs must contain at least one directory")]
    NoAssetDirs,

    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),
}

/// Run all semantic checks over a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.version.trim().is_empty() {
        errors.push(ValidationError::EmptyVersion);
    }
    if config.asset_dirs.is_empty() {
        errors.push(ValidationError::NoAssetDirs);
    }
    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_is_missing_version_and_dirs() {
        let errors = validate_config(&AppConfig::default()).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyVersion));
        assert!(errors.contains(&ValidationError::NoAssetDirs));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn complete_config_passes() {
        let config = AppConfig {
            version: "15.01".to_string(),
            asset_dirs: vec![PathBuf::from("/srv/app")],
            ..AppConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn bad_bind_address_is_reported() {
        let mut config = AppConfig {
            version: "15.01".to_string(),
            asset_dirs: vec![PathBuf::from("/srv/app")],
            ..AppConfig::default()
        };
        config.listener.bind_address = "not-an-address".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBindAddress("not-an-address".to_string())]
        );
    }
}
