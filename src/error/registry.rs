//! Package registry errors

use super::CoregenError;

/// Creates a registry lookup failed error
pub fn lookup_failed(package: impl Into<String>, reason: impl Into<String>) -> CoregenError {
    CoregenError::RegistryLookupFailed {
        package: package.into(),
        reason: reason.into(),
    }
}
