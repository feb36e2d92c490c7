//! Workspace, manifest and generator configuration errors

use super::CoregenError;

/// Creates a workspace configuration missing error
pub fn configuration_missing(reason: impl Into<String>) -> CoregenError {
    CoregenError::ConfigurationMissing {
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> CoregenError {
    CoregenError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> CoregenError {
    CoregenError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an invalid package manifest error
pub fn manifest_invalid(path: impl Into<String>, reason: impl Into<String>) -> CoregenError {
    CoregenError::ManifestInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}
